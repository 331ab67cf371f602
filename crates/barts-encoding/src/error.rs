//! Encoding error types.

use thiserror::Error;

/// Errors returned by encoding operations.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// A character cannot be represented in the target code page.
    #[error("conversion failed: {message}")]
    ConversionFailed { message: String },
}
