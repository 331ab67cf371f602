//! Hexdump-to-buffer codec.
//!
//! Record captures arrive as text in one of two layouts:
//!
//! - **Contiguous** — each line is hex bytes followed by the `**` annotation
//!   marker and display text. Lines without the marker carry no data.
//! - **Addressed** — each line starts with a hex byte offset, then
//!   whitespace-separated hex groups, optionally followed by `**` and
//!   commentary. All-zero lines are omitted from the capture and are
//!   dropped here too; overlapping lines are applied in input order, so
//!   the later line wins.
//!
//! The layout is auto-detected from the first non-blank line, but the
//! heuristic cannot distinguish a short addressed offset from a contiguous
//! hex prefix, so callers can force a layout via
//! [`DecodeConfig::format`](crate::config::DecodeConfig).

use crate::error::DecodeError;

/// Marker separating hex data from inline annotations.
pub const ANNOTATION_MARKER: &str = "**";

/// The two accepted hexdump layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DumpFormat {
    /// Hex bytes per line, annotation marker required for a line to count.
    Contiguous,
    /// `<offset> <hex groups...> [** annotation]` per line.
    Addressed,
}

/// Guess the dump layout from the first non-blank line.
///
/// A leading all-hex token suggests an addressed offset. Short tokens are
/// ambiguous; see the module docs.
pub fn detect_format(text: &str) -> DumpFormat {
    for line in text.lines() {
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        if token.bytes().all(|b| b.is_ascii_hexdigit()) {
            return DumpFormat::Addressed;
        }
        return DumpFormat::Contiguous;
    }
    DumpFormat::Contiguous
}

/// Decode dump text into a byte buffer.
///
/// With `format = None` the layout is auto-detected.
///
/// # Errors
/// Returns a [`DecodeError`] for malformed hex tokens (odd length or
/// non-hex characters). Syntactic ambiguity alone never fails; an input
/// with no data lines yields an empty buffer.
pub fn parse_dump(text: &str, format: Option<DumpFormat>) -> Result<Vec<u8>, DecodeError> {
    let format = format.unwrap_or_else(|| detect_format(text));
    match format {
        DumpFormat::Contiguous => parse_contiguous(text),
        DumpFormat::Addressed => parse_addressed(text),
    }
}

fn parse_contiguous(text: &str) -> Result<Vec<u8>, DecodeError> {
    let mut buffer = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        // Only annotated lines contribute data.
        let Some(pos) = line.find(ANNOTATION_MARKER) else {
            continue;
        };
        let hex: String = line[..pos].split_whitespace().collect();
        if hex.is_empty() {
            continue;
        }
        buffer.extend(decode_hex_token(&hex, idx + 1)?);
    }
    Ok(buffer)
}

fn parse_addressed(text: &str) -> Result<Vec<u8>, DecodeError> {
    let mut lines: Vec<(usize, Vec<u8>)> = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = match raw.find(ANNOTATION_MARKER) {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let mut tokens = line.split_whitespace();
        let Some(offset_token) = tokens.next() else {
            continue;
        };
        let offset =
            usize::from_str_radix(offset_token, 16).map_err(|_| DecodeError::InvalidOffset {
                token: offset_token.to_string(),
                line: idx + 1,
            })?;
        let hex: String = tokens.collect();
        if hex.is_empty() {
            continue;
        }
        let bytes = decode_hex_token(&hex, idx + 1)?;
        // All-zero lines were elided from the capture; skip them.
        if bytes.iter().all(|&b| b == 0) {
            continue;
        }
        if offset.checked_add(bytes.len()).is_none() {
            return Err(DecodeError::OffsetOutOfRange {
                token: offset_token.to_string(),
                line: idx + 1,
            });
        }
        lines.push((offset, bytes));
    }

    let size = lines
        .iter()
        .map(|(offset, bytes)| offset + bytes.len())
        .max()
        .unwrap_or(0);
    let mut buffer = vec![0u8; size];
    for (offset, bytes) in lines {
        buffer[offset..offset + bytes.len()].copy_from_slice(&bytes);
    }
    Ok(buffer)
}

fn decode_hex_token(token: &str, line: usize) -> Result<Vec<u8>, DecodeError> {
    // Non-ASCII commentary can bleed into the hex region; treat it as a
    // bad digit, never slice mid-character.
    if !token.is_ascii() {
        return Err(DecodeError::InvalidHexDigit {
            token: token.to_string(),
            line,
        });
    }
    if token.len() % 2 != 0 {
        return Err(DecodeError::OddHexLength {
            token: token.to_string(),
            line,
        });
    }
    let mut bytes = Vec::with_capacity(token.len() / 2);
    for i in (0..token.len()).step_by(2) {
        let pair = &token[i..i + 2];
        let byte = u8::from_str_radix(pair, 16).map_err(|_| DecodeError::InvalidHexDigit {
            token: token.to_string(),
            line,
        })?;
        bytes.push(byte);
    }
    Ok(bytes)
}
