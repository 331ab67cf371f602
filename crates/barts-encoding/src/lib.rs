#![forbid(unsafe_code)]
//! EBCDIC encoding support for BARTS record processing.
//!
//! This crate provides:
//!
//! - **CP037 code page** — the EBCDIC page used by the BARTS host systems
//! - **String conversion** — EBCDIC-to-UTF-8 decoding and the reverse
//! - **Display decoding** — total byte-to-text recovery for record dumps,
//!   with trailing NUL/space stripping and a replacement glyph for
//!   non-displayable bytes

pub mod ebcdic;
pub mod error;

pub use ebcdic::{CodePage, CP037, EBCDIC_SPACE};
pub use error::EncodingError;

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodingError>;
