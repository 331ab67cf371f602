//! Report assembly: the top-level decode pipeline.
//!
//! `decode` runs the full chain: hexdump text to bytes, record
//! classification, header and body field decoding with blank
//! suppression, and the variable-item scan when the layout declares an
//! item region. The only hard failure is hexdump syntax; every other
//! irregularity degrades to a partial report.

use barts_encoding::{CodePage, CP037};
use tracing::debug;

use crate::config::DecodeConfig;
use crate::error::DecodeError;
use crate::field::{decode_field, hex_upper, is_blank, ParsedField};
use crate::hexdump::parse_dump;
use crate::items::{ItemScan, ItemScanner};
use crate::schema::{classify, SchemaRegistry, BODY_BASE, FALLBACK_PREVIEW_LEN, HEADER_FIELDS};

/// A fully assembled decode of one record capture.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DecodedReport {
    /// The 3-character record type from the header, or `"UNK"`.
    pub record_type: String,
    /// Resolved body shape name, when the type is registered.
    pub shape: Option<&'static str>,
    /// Human-readable shape title.
    pub title: Option<&'static str>,
    /// Total reconstructed buffer length in bytes.
    pub total_length: usize,
    /// Header fields present in the buffer. Never blank-suppressed.
    pub header_fields: Vec<ParsedField>,
    /// Body fields present and non-blank.
    pub body_fields: Vec<ParsedField>,
    /// Hex preview of the body when the record type is unregistered.
    pub raw_preview: Option<String>,
    /// Variable data item scan, for layouts that declare an item region.
    pub items: Option<ItemScan>,
}

/// Decode one hexdump capture into a report.
///
/// `config` carries per-call knobs; the registry selects the schema
/// profile. Decoding is read-only with respect to both.
///
/// # Errors
/// Fails only on hexdump syntax errors. A buffer too short for the
/// header, an unknown record type, or a malformed item stream all
/// produce a (partial) report instead.
pub fn decode(
    input: &str,
    config: &DecodeConfig,
    registry: &SchemaRegistry,
) -> Result<DecodedReport, DecodeError> {
    decode_with_page(input, config, registry, &CP037)
}

/// [`decode`] with an explicit code page.
pub fn decode_with_page(
    input: &str,
    config: &DecodeConfig,
    registry: &SchemaRegistry,
    page: &CodePage,
) -> Result<DecodedReport, DecodeError> {
    let buffer = parse_dump(input, config.format)?;
    let record_type = classify(&buffer, page);
    debug!(
        record_type = %record_type,
        total_length = buffer.len(),
        "classified record"
    );

    let header_fields: Vec<ParsedField> = HEADER_FIELDS
        .iter()
        .filter_map(|d| decode_field(&buffer, 0, d, page))
        .collect();

    let Some(schema) = registry.resolve(&record_type) else {
        debug!(record_type = %record_type, "unregistered record type, raw preview");
        return Ok(DecodedReport {
            record_type,
            shape: None,
            title: None,
            total_length: buffer.len(),
            header_fields,
            body_fields: Vec::new(),
            raw_preview: Some(body_preview(&buffer)),
            items: None,
        });
    };

    let policy = config
        .blank_policy
        .unwrap_or_else(|| registry.profile().default_blank_policy());
    let body_fields: Vec<ParsedField> = schema
        .shape
        .fields()
        .iter()
        .filter(|d| {
            let start = BODY_BASE + d.offset;
            match buffer.get(start..start + d.len) {
                Some(raw) => !is_blank(raw, policy),
                None => false,
            }
        })
        .filter_map(|d| decode_field(&buffer, BODY_BASE, d, page))
        .collect();

    let items = schema
        .item_region()
        .filter(|&start| start < buffer.len())
        .map(|start| {
            let scan = ItemScanner::new(config.end_marker, config.item_cap).scan(
                &buffer, start, page,
            );
            debug!(
                items = scan.items.len(),
                state = ?scan.state,
                "scanned variable item region"
            );
            scan
        });

    Ok(DecodedReport {
        record_type,
        shape: Some(schema.shape.name()),
        title: Some(schema.shape.title()),
        total_length: buffer.len(),
        header_fields,
        body_fields,
        raw_preview: None,
        items,
    })
}

/// Uppercase-hex preview of the first bytes of the body region.
fn body_preview(buffer: &[u8]) -> String {
    if buffer.len() <= BODY_BASE {
        return String::new();
    }
    let end = buffer.len().min(BODY_BASE + FALLBACK_PREVIEW_LEN);
    hex_upper(&buffer[BODY_BASE..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlankPolicy;
    use crate::items::ScanState;
    use crate::schema::SchemaProfile;
    use barts_encoding::EBCDIC_SPACE;

    // Render a buffer as a one-line addressed dump.
    fn addressed(buffer: &[u8]) -> String {
        format!("000 {}\n", hex_upper(buffer))
    }

    fn buffer_with_type(len: usize, code: &str) -> Vec<u8> {
        let mut buf = vec![EBCDIC_SPACE; len];
        let encoded = CP037.encode(code).unwrap();
        buf[0x020..0x020 + encoded.len()].copy_from_slice(&encoded);
        buf
    }

    fn revised() -> &'static SchemaRegistry {
        SchemaRegistry::shared(SchemaProfile::Revised)
    }

    #[test]
    fn test_decode_voi_record() {
        let mut buf = buffer_with_type(0x100, "VOI");
        // ND5FDVNB at body + 0x000
        let number = CP037.encode("0012345678901 ").unwrap();
        buf[0x060..0x060 + 14].copy_from_slice(&number);
        let report = decode(&addressed(&buf), &DecodeConfig::default(), revised()).unwrap();

        assert_eq!(report.record_type, "VOI");
        assert_eq!(report.shape, Some("VOI"));
        assert_eq!(report.title, Some("Void Transaction"));
        assert!(report.raw_preview.is_none());
        assert!(report.items.is_none());
        let doc = report
            .body_fields
            .iter()
            .find(|f| f.name == "ND5FDVNB")
            .unwrap();
        assert_eq!(doc.value, "0012345678901");
        assert_eq!(doc.offset, 0x060);
    }

    #[test]
    fn test_header_fields_never_blank_suppressed() {
        let buf = buffer_with_type(0x100, "VOI");
        let report = decode(&addressed(&buf), &DecodeConfig::default(), revised()).unwrap();
        // All-space header fields still appear.
        assert!(report
            .header_fields
            .iter()
            .any(|f| f.name != "ND5FDTYP" && f.value.is_empty()));
        let typ = report
            .header_fields
            .iter()
            .find(|f| f.name == "ND5FDTYP")
            .unwrap();
        assert_eq!(typ.value, "VOI");
    }

    #[test]
    fn test_blank_body_fields_suppressed() {
        let buf = buffer_with_type(0x100, "VOI");
        let report = decode(&addressed(&buf), &DecodeConfig::default(), revised()).unwrap();
        assert!(report.body_fields.is_empty());
    }

    #[test]
    fn test_blank_policy_space_or_zero() {
        let mut buf = buffer_with_type(0x100, "VOI");
        // All-zero document number: visible under SpaceOnly, suppressed
        // under SpaceOrZero.
        buf[0x060..0x060 + 14].fill(0);
        let strict = DecodeConfig {
            blank_policy: Some(BlankPolicy::SpaceOrZero),
            ..DecodeConfig::default()
        };
        let lenient = DecodeConfig {
            blank_policy: Some(BlankPolicy::SpaceOnly),
            ..DecodeConfig::default()
        };
        let suppressed = decode(&addressed(&buf), &strict, revised()).unwrap();
        let visible = decode(&addressed(&buf), &lenient, revised()).unwrap();
        assert!(!suppressed.body_fields.iter().any(|f| f.name == "ND5FDVNB"));
        assert!(visible.body_fields.iter().any(|f| f.name == "ND5FDVNB"));
    }

    #[test]
    fn test_classic_profile_defaults_to_space_or_zero() {
        let mut buf = buffer_with_type(0x100, "VOI");
        buf[0x060..0x060 + 14].fill(0);
        let classic = SchemaRegistry::shared(SchemaProfile::Classic);
        let report = decode(&addressed(&buf), &DecodeConfig::default(), classic).unwrap();
        assert!(!report.body_fields.iter().any(|f| f.name == "ND5FDVNB"));
    }

    #[test]
    fn test_unknown_type_falls_back_to_preview() {
        let mut buf = buffer_with_type(0x100, "ZZZ");
        buf[0x060] = 0xDE;
        buf[0x061] = 0xAD;
        let report = decode(&addressed(&buf), &DecodeConfig::default(), revised()).unwrap();
        assert_eq!(report.record_type, "ZZZ");
        assert!(report.shape.is_none());
        assert!(report.body_fields.is_empty());
        assert!(report.items.is_none());
        let preview = report.raw_preview.unwrap();
        assert!(preview.starts_with("DEAD"));
        // Preview is capped at 100 bytes of body.
        assert_eq!(preview.len(), (0x100 - 0x060).min(100) * 2);
    }

    #[test]
    fn test_short_buffer_is_unknown_with_empty_preview() {
        let report = decode("000 D5FD\n", &DecodeConfig::default(), revised()).unwrap();
        assert_eq!(report.record_type, "UNK");
        assert_eq!(report.total_length, 2);
        assert!(report.header_fields.len() < HEADER_FIELDS.len());
        assert_eq!(report.raw_preview.as_deref(), Some(""));
    }

    #[test]
    fn test_tar_item_region_scanned() {
        let mut buf = buffer_with_type(0x200, "TAR");
        // Item region at 0x0E8: one item (tag 1, total 5, payload "AB"),
        // then the end marker.
        buf[0x0E8] = 0x01;
        buf[0x0E9] = 0x00;
        buf[0x0EA] = 0x05;
        buf[0x0EB..0x0ED].copy_from_slice(&CP037.encode("AB").unwrap());
        buf[0x0ED] = 0x4E;
        let report = decode(&addressed(&buf), &DecodeConfig::default(), revised()).unwrap();
        let scan = report.items.unwrap();
        assert_eq!(scan.state, ScanState::End);
        assert_eq!(scan.items.len(), 1);
        assert_eq!(scan.items[0].tag, 1);
        assert_eq!(scan.items[0].text, "AB");
    }

    #[test]
    fn test_item_region_past_buffer_end_skipped() {
        let buf = buffer_with_type(0x080, "TAR");
        let report = decode(&addressed(&buf), &DecodeConfig::default(), revised()).unwrap();
        assert!(report.items.is_none());
    }

    #[test]
    fn test_mar_has_no_items_in_revised_profile() {
        let buf = buffer_with_type(0x400, "MAR");
        let report = decode(&addressed(&buf), &DecodeConfig::default(), revised()).unwrap();
        assert_eq!(report.shape, Some("MAR"));
        assert!(report.items.is_none());
    }

    #[test]
    fn test_contiguous_input_end_to_end() {
        let buf = buffer_with_type(0x100, "VOI");
        let hex = hex_upper(&buf);
        let mut input = String::new();
        for chunk in hex.as_bytes().chunks(32) {
            input.push_str(std::str::from_utf8(chunk).unwrap());
            input.push_str(" ** line\n");
        }
        let report = decode(&input, &DecodeConfig::default(), revised()).unwrap();
        assert_eq!(report.record_type, "VOI");
        assert_eq!(report.total_length, 0x100);
    }

    #[test]
    fn test_syntax_error_propagates() {
        let err = decode("000 C1C\n", &DecodeConfig::default(), revised()).unwrap_err();
        assert!(matches!(err, DecodeError::OddHexLength { .. }));
    }

    #[test]
    fn test_report_serializes() {
        let buf = buffer_with_type(0x100, "VOI");
        let report = decode(&addressed(&buf), &DecodeConfig::default(), revised()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"record_type\":\"VOI\""));
    }
}
