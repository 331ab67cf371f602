//! Field descriptors and value rendering.
//!
//! A [`FieldDescriptor`] names one fixed byte range inside a record and how
//! to render it. Decoding a field against a buffer yields a
//! [`ParsedField`], or nothing when the buffer is too short for the
//! field's range — truncated captures are normal and fields past the end
//! are simply omitted.

use barts_encoding::CodePage;

use crate::config::BlankPolicy;

/// The EBCDIC space code point, used by blank suppression.
pub const EBCDIC_SPACE: u8 = barts_encoding::EBCDIC_SPACE;

/// Placeholder value rendered for spare (reserved) fields.
pub const SPARE_PLACEHOLDER: &str = "(SPARE)";

// ── FieldKind ──────────────────────────────────────────────────────

/// How a field's bytes are interpreted for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FieldKind {
    /// EBCDIC character data.
    Char,
    /// Packed display (PIC) — numeric text stored as EBCDIC characters.
    Pic,
    /// Unsigned big-endian binary integer, rendered as decimal.
    Bin,
    /// Raw bits, rendered as uppercase hex with no interpretation.
    Bit,
    /// PARS binary day number (2 bytes), rendered as `DDMMMYY`.
    Date,
    /// Reserved bytes; value is a fixed placeholder.
    Spare,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Char => "CHAR",
            Self::Pic => "PIC",
            Self::Bin => "BIN",
            Self::Bit => "BIT",
            Self::Date => "DATE",
            Self::Spare => "SPARE",
        };
        f.write_str(s)
    }
}

// ── FieldDescriptor ────────────────────────────────────────────────

/// One field of a record layout: name, byte range, interpretation.
///
/// Descriptors live in the static schema tables and never change after
/// process start. The byte range is half-open: `offset..offset + len`,
/// relative to the layout's base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// DSECT field name (e.g., "ND5FDTYP").
    pub name: &'static str,
    /// Byte offset relative to the layout base.
    pub offset: usize,
    /// Field length in bytes.
    pub len: usize,
    /// Interpretation for display.
    pub kind: FieldKind,
    /// Human-readable description.
    pub desc: &'static str,
}

// ── ParsedField ────────────────────────────────────────────────────

/// A rendered field: descriptor metadata plus raw and display values.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ParsedField {
    /// Field name.
    pub name: &'static str,
    /// Absolute byte offset within the record buffer.
    pub offset: usize,
    /// Field length in bytes.
    pub length: usize,
    /// Interpretation tag.
    pub kind: FieldKind,
    /// Raw bytes as uppercase hex.
    pub hex: String,
    /// Rendered display value.
    pub value: String,
    /// Field description.
    pub description: &'static str,
}

// ── Decoding ───────────────────────────────────────────────────────

/// Check a field's raw bytes against the blank-suppression predicate.
pub fn is_blank(bytes: &[u8], policy: BlankPolicy) -> bool {
    match policy {
        BlankPolicy::SpaceOnly => bytes.iter().all(|&b| b == EBCDIC_SPACE),
        BlankPolicy::SpaceOrZero => {
            bytes.iter().all(|&b| b == EBCDIC_SPACE) || bytes.iter().all(|&b| b == 0)
        }
    }
}

/// Render raw bytes as uppercase hex.
pub fn hex_upper(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}

/// Render a field's bytes per its interpretation tag.
pub fn render_value(bytes: &[u8], kind: FieldKind, page: &CodePage) -> String {
    match kind {
        FieldKind::Char | FieldKind::Pic => page.decode_display(bytes),
        FieldKind::Bin => {
            let value = bytes.iter().fold(0u128, |acc, &b| (acc << 8) | u128::from(b));
            value.to_string()
        }
        FieldKind::Bit => hex_upper(bytes),
        FieldKind::Date => {
            let day = bytes.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
            render_pars_date(day)
        }
        FieldKind::Spare => SPARE_PLACEHOLDER.to_string(),
    }
}

/// Decode one field against a buffer.
///
/// `base` is the absolute offset of the layout the descriptor belongs to.
/// Returns `None` when the field's range extends past the end of the
/// buffer.
pub fn decode_field(
    buffer: &[u8],
    base: usize,
    descriptor: &FieldDescriptor,
    page: &CodePage,
) -> Option<ParsedField> {
    let start = base + descriptor.offset;
    let end = start + descriptor.len;
    if end > buffer.len() {
        return None;
    }
    let raw = &buffer[start..end];
    Some(ParsedField {
        name: descriptor.name,
        offset: start,
        length: descriptor.len,
        kind: descriptor.kind,
        hex: hex_upper(raw),
        value: render_value(raw, descriptor.kind, page),
        description: descriptor.desc,
    })
}

// ── PARS dates ─────────────────────────────────────────────────────

const MONTH_ABBR: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

// Days from 1963-01-01 (PARS day 1) to 1970-01-01.
const PARS_EPOCH_TO_UNIX: i64 = 2557;

/// Render a PARS binary day number as `DDMMMYY`.
///
/// Day 1 is 1963-01-01. A zero day number renders as `"0"`, matching the
/// host convention for unset dates.
pub fn render_pars_date(day: u32) -> String {
    if day == 0 {
        return "0".to_string();
    }
    let unix_days = i64::from(day) - 1 - PARS_EPOCH_TO_UNIX;
    let (year, month, dom) = civil_from_days(unix_days);
    format!(
        "{:02}{}{:02}",
        dom,
        MONTH_ABBR[(month - 1) as usize],
        year.rem_euclid(100)
    )
}

// Proleptic Gregorian date from days since 1970-01-01.
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let dom = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    (if month <= 2 { year + 1 } else { year }, month, dom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use barts_encoding::CP037;

    fn fd(offset: usize, len: usize, kind: FieldKind) -> FieldDescriptor {
        FieldDescriptor {
            name: "TEST",
            offset,
            len,
            kind,
            desc: "test field",
        }
    }

    #[test]
    fn test_char_roundtrip() {
        let buf = CP037.encode("TAR").unwrap();
        let parsed = decode_field(&buf, 0, &fd(0, 3, FieldKind::Char), &CP037).unwrap();
        assert_eq!(parsed.value, "TAR");
        assert_eq!(parsed.hex, "E3C1D9");
    }

    #[test]
    fn test_pic_roundtrip() {
        let buf = CP037.encode("0012345 ").unwrap();
        let parsed = decode_field(&buf, 0, &fd(0, 8, FieldKind::Pic), &CP037).unwrap();
        assert_eq!(parsed.value, "0012345");
    }

    #[test]
    fn test_bin_big_endian() {
        let buf = [0x00, 0x00, 0x01, 0x02];
        let parsed = decode_field(&buf, 0, &fd(0, 4, FieldKind::Bin), &CP037).unwrap();
        assert_eq!(parsed.value, "258");
        let parsed2 = decode_field(&buf, 0, &fd(2, 2, FieldKind::Bin), &CP037).unwrap();
        assert_eq!(parsed2.value, "258");
    }

    #[test]
    fn test_bit_uppercase_hex() {
        let buf = [0xDE, 0xAD, 0xBE, 0xEF];
        let parsed = decode_field(&buf, 0, &fd(0, 4, FieldKind::Bit), &CP037).unwrap();
        assert_eq!(parsed.value, "DEADBEEF");
    }

    #[test]
    fn test_spare_placeholder_keeps_raw_bytes() {
        let buf = [0x12, 0x34];
        let parsed = decode_field(&buf, 0, &fd(0, 2, FieldKind::Spare), &CP037).unwrap();
        assert_eq!(parsed.value, SPARE_PLACEHOLDER);
        assert_eq!(parsed.hex, "1234");
    }

    #[test]
    fn test_out_of_range_field_is_absent() {
        let buf = [0u8; 4];
        assert!(decode_field(&buf, 0, &fd(2, 3, FieldKind::Char), &CP037).is_none());
        assert!(decode_field(&buf, 4, &fd(0, 1, FieldKind::Char), &CP037).is_none());
    }

    #[test]
    fn test_base_offset_applies() {
        let mut buf = vec![0u8; 4];
        buf.extend(CP037.encode("XY").unwrap());
        let parsed = decode_field(&buf, 4, &fd(0, 2, FieldKind::Char), &CP037).unwrap();
        assert_eq!(parsed.offset, 4);
        assert_eq!(parsed.value, "XY");
    }

    #[test]
    fn test_blank_space_only() {
        let spaces = [EBCDIC_SPACE; 4];
        let zeros = [0u8; 4];
        assert!(is_blank(&spaces, BlankPolicy::SpaceOnly));
        assert!(!is_blank(&zeros, BlankPolicy::SpaceOnly));
        assert!(is_blank(&spaces, BlankPolicy::SpaceOrZero));
        assert!(is_blank(&zeros, BlankPolicy::SpaceOrZero));
    }

    #[test]
    fn test_blank_mixed_bytes_not_blank() {
        let mixed = [EBCDIC_SPACE, 0x00];
        assert!(!is_blank(&mixed, BlankPolicy::SpaceOnly));
        assert!(!is_blank(&mixed, BlankPolicy::SpaceOrZero));
    }

    #[test]
    fn test_pars_date_day_one() {
        assert_eq!(render_pars_date(1), "01JAN63");
    }

    #[test]
    fn test_pars_date_unix_epoch() {
        // 1962-12-31 + 2558 days = 1970-01-01
        assert_eq!(render_pars_date(2558), "01JAN70");
    }

    #[test]
    fn test_pars_date_leap_boundary() {
        // 1964 was a leap year: day 365+60 = 1964-02-29
        assert_eq!(render_pars_date(365 + 60), "29FEB64");
    }

    #[test]
    fn test_pars_date_zero_renders_zero() {
        assert_eq!(render_pars_date(0), "0");
    }

    #[test]
    fn test_date_field_rendering() {
        let buf = [0x00, 0x01];
        let parsed = decode_field(&buf, 0, &fd(0, 2, FieldKind::Date), &CP037).unwrap();
        assert_eq!(parsed.value, "01JAN63");
    }
}
