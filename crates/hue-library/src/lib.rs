//! # hue-library — saved colors and palettes
//!
//! The user's personal collection: colors and palettes they saved, marked
//! as favorites, shared as links, or exported.
//!
//! # Architecture
//!
//! ```text
//! library.rs: Library model (add, delete, favorite, import, query)
//!     │
//!     ├── store.rs:  two flat JSON files in a directory
//!     ├── share.rs:  base64 share tokens and links
//!     └── export.rs: one pretty JSON document with a timestamp
//! ```
//!
//! The model is pure. Time enters as an explicit millisecond argument and
//! the filesystem only through [`LibraryStore`].

pub mod error;
pub mod export;
pub mod library;
pub mod share;
pub mod store;

pub use error::{LibraryError, Result};
pub use export::{export_file_name, export_json};
pub use library::{Entry, Library, LibraryQuery, SavedColor, SavedPalette, SortMode, normalize_hex};
pub use share::{
    ShareKind, decode_color, decode_palette, encode_color, encode_palette, share_url,
    token_from_link,
};
pub use store::{COLORS_FILE, LibraryStore, PALETTES_FILE};
