//! Decoder error types.
//!
//! Only hexdump syntax problems abort a decode. Everything else —
//! short buffers, unknown record types, malformed item streams — is
//! recovered locally and surfaces in the report instead.

use miette::Diagnostic;
use thiserror::Error;

/// Errors returned by record decoding.
#[derive(Debug, Error, Diagnostic)]
pub enum DecodeError {
    /// A hex token with an odd number of digits.
    #[error("odd-length hex token '{token}' on line {line}")]
    #[diagnostic(code(barts::hexdump::odd_length))]
    OddHexLength { token: String, line: usize },

    /// A hex token containing a non-hex character.
    #[error("invalid hex digit in token '{token}' on line {line}")]
    #[diagnostic(code(barts::hexdump::invalid_digit))]
    InvalidHexDigit { token: String, line: usize },

    /// An addressed-form line whose offset token is not hexadecimal.
    #[error("invalid offset '{token}' on line {line}")]
    #[diagnostic(code(barts::hexdump::invalid_offset))]
    InvalidOffset { token: String, line: usize },

    /// An addressed-form line whose byte range does not fit in the
    /// address space.
    #[error("offset '{token}' out of range on line {line}")]
    #[diagnostic(code(barts::hexdump::offset_out_of_range))]
    OffsetOutOfRange { token: String, line: usize },
}
