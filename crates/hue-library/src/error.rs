//! Library errors.

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Everything that can go wrong editing, storing or sharing the library.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("a palette needs at least one color")]
    EmptyPalette,
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),
    #[error("no saved item with id `{0}`")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed share token: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("share token is not UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

pub type Result<T, E = LibraryError> = std::result::Result<T, E>;
