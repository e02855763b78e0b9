//! Share tokens — a saved color or palette packed into a link.
//!
//! A token is the standard base64 of a compact JSON object with the `=`
//! padding stripped:
//!
//! | Item    | JSON                                            |
//! |---------|-------------------------------------------------|
//! | color   | `{"h":"#rrggbb","n":name,"f":0\|1}`             |
//! | palette | `{"n":name,"c":[hex,...],"d":description,"f":0\|1}` |
//!
//! Links look like `{origin}/library?c={token}` for a color and
//! `{origin}/library?p={token}` for a palette. Decoding accepts tokens
//! with or without padding.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::library::{
    SavedColor, SavedPalette, clean_colors, clean_description, clean_name, normalize_hex,
};

const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Which library item a link carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareKind {
    Color,
    Palette,
}

impl ShareKind {
    /// Query parameter name in a share link.
    #[must_use]
    pub const fn param(self) -> &'static str {
        match self {
            Self::Color => "c",
            Self::Palette => "p",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SharedColor {
    h: String,
    n: String,
    #[serde(default)]
    f: u8,
}

#[derive(Debug, Serialize, Deserialize)]
struct SharedPalette {
    n: String,
    c: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    d: Option<String>,
    #[serde(default)]
    f: u8,
}

fn encode<T: Serialize>(payload: &T) -> Result<String> {
    let json = serde_json::to_string(payload)?;
    Ok(TOKEN_ENGINE.encode(json))
}

fn decode<T: DeserializeOwned>(token: &str) -> Result<T> {
    let bytes = TOKEN_ENGINE.decode(token.trim())?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}

/// Token for a saved color.
///
/// # Errors
///
/// Only if JSON serialization fails, which it does not for these types.
pub fn encode_color(color: &SavedColor) -> Result<String> {
    encode(&SharedColor {
        h: color.hex.clone(),
        n: color.name.clone(),
        f: u8::from(color.favorite),
    })
}

/// Token for a saved palette.
///
/// # Errors
///
/// Only if JSON serialization fails, which it does not for these types.
pub fn encode_palette(palette: &SavedPalette) -> Result<String> {
    encode(&SharedPalette {
        n: palette.name.clone(),
        c: palette.colors.clone(),
        d: palette.description.clone(),
        f: u8::from(palette.favorite),
    })
}

/// Unpack a color token into a new library entry stamped with `now`. The
/// id is provisional; [`Library::import_color`](crate::Library::import_color)
/// assigns the final one.
///
/// # Errors
///
/// Base64, UTF-8 or JSON failures, a blank name, or a color that is not
/// valid hex.
pub fn decode_color(token: &str, now: i64) -> Result<SavedColor> {
    let result = decode::<SharedColor>(token).and_then(|shared| {
        Ok(SavedColor {
            id: now.to_string(),
            name: clean_name(&shared.n)?,
            hex: normalize_hex(&shared.h)?,
            timestamp: now,
            favorite: shared.f == 1,
        })
    });
    if let Err(err) = &result {
        tracing::warn!("failed to load shared color: {err}");
    }
    result
}

/// Unpack a palette token into a new library entry stamped with `now`.
///
/// # Errors
///
/// Base64, UTF-8 or JSON failures, a blank name, no colors, or any color
/// that is not valid hex.
pub fn decode_palette(token: &str, now: i64) -> Result<SavedPalette> {
    let result = decode::<SharedPalette>(token).and_then(|shared| {
        Ok(SavedPalette {
            id: now.to_string(),
            name: clean_name(&shared.n)?,
            description: shared.d.as_deref().and_then(clean_description),
            colors: clean_colors(&shared.c)?,
            timestamp: now,
            favorite: shared.f == 1,
        })
    });
    if let Err(err) = &result {
        tracing::warn!("failed to load shared palette: {err}");
    }
    result
}

/// Full share link for a token.
#[must_use]
pub fn share_url(origin: &str, kind: ShareKind, token: &str) -> String {
    format!("{}/library?{}={token}", origin.trim_end_matches('/'), kind.param())
}

/// Pull the token out of a share link. A color parameter wins over a
/// palette parameter when a link has both.
#[must_use]
pub fn token_from_link(link: &str) -> Option<(ShareKind, String)> {
    let (_, query) = link.trim().split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    let param = |kind: ShareKind| {
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, value)| *key == kind.param() && !value.is_empty())
            .map(|(_, value)| (kind, value.to_string()))
    };
    param(ShareKind::Color).or_else(|| param(ShareKind::Palette))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
