//! Integration tests covering the full capture-to-report pipeline.

use barts_encoding::{CP037, EBCDIC_SPACE};
use barts_record::{
    decode, BlankPolicy, DecodeConfig, DecodeError, DumpFormat, ScanState, SchemaProfile,
    SchemaRegistry,
};

const BODY: usize = 0x060;

/// Build a record buffer: space-filled, with the type code at 0x020.
fn record(len: usize, code: &str) -> Vec<u8> {
    let mut buf = vec![EBCDIC_SPACE; len];
    let encoded = CP037.encode(code).unwrap();
    buf[0x020..0x020 + encoded.len()].copy_from_slice(&encoded);
    buf
}

fn put_text(buf: &mut [u8], offset: usize, text: &str) {
    let encoded = CP037.encode(text).unwrap();
    buf[offset..offset + encoded.len()].copy_from_slice(&encoded);
}

/// Render a buffer the way host dump listings do: 16 bytes per line,
/// leading hex offset, four-byte groups, annotation tail. All-zero
/// lines are elided, as the host listing elides them.
fn addressed_dump(buffer: &[u8]) -> String {
    let mut out = String::new();
    for (i, chunk) in buffer.chunks(16).enumerate() {
        if chunk.iter().all(|&b| b == 0) {
            continue;
        }
        let groups: Vec<String> = chunk
            .chunks(4)
            .map(|g| g.iter().map(|b| format!("{b:02X}")).collect())
            .collect();
        let text = CP037.decode_display(chunk);
        out.push_str(&format!("{:03X} {} ** {}\n", i * 16, groups.join(" "), text));
    }
    out
}

/// Test: a voided-ticket capture decodes end to end from an addressed
/// dump, with blank fields suppressed and populated fields rendered.
#[test]
fn voided_ticket_addressed_capture() {
    let mut buf = record(0x100, "VOI");
    put_text(&mut buf, BODY, "0012345678901 "); // document number
    put_text(&mut buf, BODY + 0x012, "AGENT01"); // creating agent
    buf[BODY + 0x010] = 0x00; // creation date, PARS day 1
    buf[BODY + 0x011] = 0x01;

    let registry = SchemaRegistry::shared(SchemaProfile::Revised);
    let report = decode(&addressed_dump(&buf), &DecodeConfig::default(), registry).unwrap();

    assert_eq!(report.record_type, "VOI");
    assert_eq!(report.title, Some("Void Transaction"));
    assert_eq!(report.total_length, 0x100);

    let by_name = |name: &str| report.body_fields.iter().find(|f| f.name == name);
    assert_eq!(by_name("ND5FDVNB").unwrap().value, "0012345678901");
    assert_eq!(by_name("ND5FDVAG").unwrap().value, "AGENT01");
    assert_eq!(by_name("ND5FDVCD").unwrap().value, "01JAN63");
    // Untouched (space-filled) fields are suppressed.
    assert!(by_name("ND5FDVOT").is_none());
}

/// Test: a ticket record's variable item region is scanned, items are
/// named from the catalog, and the end marker terminates the scan.
#[test]
fn ticket_record_with_item_stream() {
    let mut buf = record(0x200, "TAR");
    put_text(&mut buf, BODY, "0011234567890 ");

    // Item region at body + 0x088: two items, then the end marker.
    let mut at = 0x0E8;
    for payload in ["FIRST", "SECOND"] {
        let encoded = CP037.encode(payload).unwrap();
        buf[at] = 0x01;
        buf[at + 1] = 0x00;
        buf[at + 2] = (3 + encoded.len()) as u8;
        buf[at + 3..at + 3 + encoded.len()].copy_from_slice(&encoded);
        at += 3 + encoded.len();
    }
    buf[at] = 0x4E;

    let registry = SchemaRegistry::shared(SchemaProfile::Revised);
    let report = decode(&addressed_dump(&buf), &DecodeConfig::default(), registry).unwrap();

    assert_eq!(report.shape, Some("TAR"));
    let scan = report.items.unwrap();
    assert_eq!(scan.state, ScanState::End);
    assert_eq!(scan.items.len(), 2);
    assert_eq!(scan.items[0].text, "FIRST");
    assert_eq!(scan.items[1].text, "SECOND");
    assert_eq!(scan.items[0].name, "Transmission Control Number");
    assert_eq!(scan.end_offset, at);
}

/// Test: the NBT alias decodes with the TAR layout.
#[test]
fn nbt_alias_uses_ticket_layout() {
    let buf = record(0x100, "NBT");
    let registry = SchemaRegistry::shared(SchemaProfile::Revised);
    let report = decode(&addressed_dump(&buf), &DecodeConfig::default(), registry).unwrap();
    assert_eq!(report.record_type, "NBT");
    assert_eq!(report.shape, Some("TAR"));
}

/// Test: contiguous captures produce the same buffer as addressed ones.
#[test]
fn contiguous_capture_matches_addressed() {
    let mut buf = record(0x100, "REF");
    put_text(&mut buf, BODY, "0098765432109 ");

    let hex: String = buf.iter().map(|b| format!("{b:02X}")).collect();
    let mut contiguous = String::new();
    for chunk in hex.as_bytes().chunks(32) {
        contiguous.push_str(std::str::from_utf8(chunk).unwrap());
        contiguous.push_str("   ** .\n");
    }

    let registry = SchemaRegistry::shared(SchemaProfile::Revised);
    let config = DecodeConfig {
        format: Some(DumpFormat::Contiguous),
        ..DecodeConfig::default()
    };
    let from_contiguous = decode(&contiguous, &config, registry).unwrap();
    let from_addressed =
        decode(&addressed_dump(&buf), &DecodeConfig::default(), registry).unwrap();

    assert_eq!(from_contiguous.record_type, "REF");
    assert_eq!(from_contiguous.total_length, from_addressed.total_length);
    assert_eq!(
        from_contiguous.body_fields.len(),
        from_addressed.body_fields.len()
    );
}

/// Test: the two schema profiles route a MAR record differently.
#[test]
fn mar_routing_differs_by_profile() {
    let buf = record(0x400, "MAR");
    let dump = addressed_dump(&buf);
    let config = DecodeConfig::default();

    let classic = decode(&dump, &config, SchemaRegistry::shared(SchemaProfile::Classic)).unwrap();
    let revised = decode(&dump, &config, SchemaRegistry::shared(SchemaProfile::Revised)).unwrap();
    assert_eq!(classic.shape, Some("MIR"));
    assert_eq!(revised.shape, Some("MAR"));
}

/// Test: an unregistered record type yields the header plus a raw body
/// preview instead of failing.
#[test]
fn unknown_type_degrades_to_preview() {
    let mut buf = record(0x100, "XQJ");
    buf[BODY] = 0xCA;
    buf[BODY + 1] = 0xFE;
    let registry = SchemaRegistry::shared(SchemaProfile::Revised);
    let report = decode(&addressed_dump(&buf), &DecodeConfig::default(), registry).unwrap();

    assert_eq!(report.record_type, "XQJ");
    assert!(report.shape.is_none());
    assert!(report.header_fields.iter().any(|f| f.name == "ND5FDTYP"));
    assert!(report.raw_preview.unwrap().starts_with("CAFE"));
}

/// Test: a capture truncated mid-record still yields the fields that
/// fit, and the blank policy override takes effect.
#[test]
fn truncated_capture_and_policy_override() {
    let mut buf = record(0x400, "MAR");
    buf.truncate(0x80);
    buf[BODY..0x80].fill(0);

    let registry = SchemaRegistry::shared(SchemaProfile::Revised);
    let strict = DecodeConfig {
        blank_policy: Some(BlankPolicy::SpaceOrZero),
        ..DecodeConfig::default()
    };
    let report = decode(&addressed_dump(&buf), &strict, registry).unwrap();
    assert_eq!(report.record_type, "MAR");
    // Zero-filled body prefix suppressed, everything past 0x80 absent.
    assert!(report.body_fields.is_empty());
}

/// Test: malformed hex is the one hard failure.
#[test]
fn malformed_hex_fails() {
    let registry = SchemaRegistry::shared(SchemaProfile::Revised);
    let err = decode("000 E3C1D", &DecodeConfig::default(), registry).unwrap_err();
    assert!(matches!(err, DecodeError::OddHexLength { .. }));
}

/// Test: reports serialize to JSON with items and fields inline.
#[test]
fn report_json_shape() {
    let buf = record(0x100, "VOI");
    let registry = SchemaRegistry::shared(SchemaProfile::Revised);
    let report = decode(&addressed_dump(&buf), &DecodeConfig::default(), registry).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["record_type"], "VOI");
    assert_eq!(json["title"], "Void Transaction");
    assert!(json["header_fields"].is_array());
}
