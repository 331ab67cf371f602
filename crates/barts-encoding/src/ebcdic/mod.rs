//! EBCDIC conversion for the CP037 code page.
//!
//! BARTS host data is recorded in CP037 (EBCDIC US/Canada). This module
//! provides string-level and byte-level conversion plus the display-oriented
//! [`CodePage::decode_display`] used when rendering record dumps: it never
//! fails, strips trailing NULs and spaces, and substitutes a replacement
//! glyph for bytes with no printable mapping.

mod tables;

pub use tables::{CodePage, CP037};

use crate::error::EncodingError;

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodingError>;

/// The EBCDIC space code point.
pub const EBCDIC_SPACE: u8 = 0x40;

/// Glyph substituted for bytes that decode to control characters.
pub const REPLACEMENT_GLYPH: char = '.';

impl CodePage {
    /// Decode EBCDIC bytes to a UTF-8 string.
    ///
    /// Every byte maps to a character in the Latin-1 range, so decoding
    /// cannot fail; control bytes decode to control characters unchanged.
    pub fn decode(&self, bytes: &[u8]) -> String {
        bytes
            .iter()
            .map(|&b| char::from(self.ebcdic_to_ascii[b as usize]))
            .collect()
    }

    /// Encode a UTF-8 string to EBCDIC bytes.
    ///
    /// # Errors
    /// Returns `EncodingError::ConversionFailed` if the string contains
    /// characters outside the Latin-1 range representable in this page.
    pub fn encode(&self, s: &str) -> Result<Vec<u8>> {
        let mut result = Vec::with_capacity(s.len());
        for ch in s.chars() {
            if ch as u32 > 255 {
                return Err(EncodingError::ConversionFailed {
                    message: format!(
                        "Character '{}' (U+{:04X}) cannot be encoded in {}",
                        ch, ch as u32, self.name
                    ),
                });
            }
            result.push(self.ascii_to_ebcdic[ch as u32 as usize]);
        }
        Ok(result)
    }

    /// Decode EBCDIC bytes for display in a record report.
    ///
    /// Total over all inputs. Trailing NULs are stripped, then trailing
    /// spaces; any remaining control characters become
    /// [`REPLACEMENT_GLYPH`]. Interior spaces are preserved.
    pub fn decode_display(&self, bytes: &[u8]) -> String {
        let mut chars: Vec<char> = bytes
            .iter()
            .map(|&b| char::from(self.ebcdic_to_ascii[b as usize]))
            .collect();
        while chars.last() == Some(&'\0') {
            chars.pop();
        }
        while chars.last() == Some(&' ') {
            chars.pop();
        }
        chars
            .into_iter()
            .map(|c| if c.is_control() { REPLACEMENT_GLYPH } else { c })
            .collect()
    }

    /// Convert a single EBCDIC byte to its Unicode character.
    pub fn ebcdic_to_char(&self, ebcdic: u8) -> char {
        char::from(self.ebcdic_to_ascii[ebcdic as usize])
    }

    /// Convert a single EBCDIC byte to ASCII/Latin-1.
    #[inline]
    pub fn ebcdic_to_ascii_byte(&self, ebcdic: u8) -> u8 {
        self.ebcdic_to_ascii[ebcdic as usize]
    }

    /// Convert a single ASCII/Latin-1 byte to EBCDIC.
    #[inline]
    pub fn ascii_to_ebcdic_byte(&self, ascii: u8) -> u8 {
        self.ascii_to_ebcdic[ascii as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cp037_roundtrip() {
        let original = "HELLO WORLD";
        let encoded = CP037.encode(original).unwrap();
        let decoded = CP037.decode(&encoded);
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_hello_cp037() {
        let hello_ebcdic = CP037.encode("HELLO").unwrap();
        assert_eq!(hello_ebcdic, vec![0xC8, 0xC5, 0xD3, 0xD3, 0xD6]);
    }

    #[test]
    fn test_digits_cp037() {
        let encoded = CP037.encode("0123456789").unwrap();
        assert_eq!(
            encoded,
            vec![0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9]
        );
    }

    #[test]
    fn test_space_cp037() {
        let space_encoded = CP037.encode(" ").unwrap();
        assert_eq!(space_encoded, vec![EBCDIC_SPACE]);
    }

    #[test]
    fn test_roundtrip_all_bytes() {
        for b in 0u8..=255 {
            let decoded = CP037.decode(&[b]);
            let re_encoded = CP037.encode(&decoded).unwrap();
            assert_eq!(
                re_encoded,
                vec![b],
                "CP037 roundtrip failed for byte 0x{:02X}",
                b
            );
        }
    }

    #[test]
    fn test_ebcdic_to_char_basic() {
        assert_eq!(CP037.ebcdic_to_char(0xC1), 'A');
        assert_eq!(CP037.ebcdic_to_char(0xF0), '0');
        assert_eq!(CP037.ebcdic_to_char(0x40), ' ');
    }

    #[test]
    fn test_encode_unsupported_char() {
        let err = CP037.encode("€").unwrap_err();
        assert!(matches!(err, EncodingError::ConversionFailed { .. }));
    }

    #[test]
    fn test_decode_display_never_fails() {
        for b in 0u8..=255 {
            let _ = CP037.decode_display(&[b, b, b]);
        }
    }

    #[test]
    fn test_decode_display_strips_trailing_nuls_and_spaces() {
        // "AB" + NUL NUL
        assert_eq!(CP037.decode_display(&[0xC1, 0xC2, 0x00, 0x00]), "AB");
        // "AB" + spaces
        assert_eq!(CP037.decode_display(&[0xC1, 0xC2, 0x40, 0x40]), "AB");
        // spaces then NULs: both runs removed
        assert_eq!(CP037.decode_display(&[0xC1, 0x40, 0x40, 0x00]), "A");
    }

    #[test]
    fn test_decode_display_preserves_interior_spaces() {
        assert_eq!(CP037.decode_display(&[0xC1, 0x40, 0xC2, 0x40]), "A B");
    }

    #[test]
    fn test_decode_display_replaces_control_bytes() {
        // 0x00 interior decodes to NUL, replaced by the glyph
        assert_eq!(CP037.decode_display(&[0x00, 0xC1]), ".A");
    }
}
