//! Variable-length data item scanner (ND5FDITM).
//!
//! TAR and PAR records carry a trailing stream of self-describing items:
//! a 1-byte type tag, a 2-byte big-endian total length covering tag +
//! length + payload, then the payload. Tag 0x00 is inter-item padding and
//! a reserved tag (0x4E by default) marks the end of the stream.
//!
//! The scanner is a single-pass, one-shot state machine. It never fails:
//! malformed lengths and short buffers end the scan with a terminal state
//! carried on the result, and every item decoded before that point remains
//! valid.

use barts_encoding::CodePage;
use tracing::debug;

use crate::field::hex_upper;

/// Reserved tag value marking the end of an item stream.
pub const END_MARKER: u8 = 0x4E;

/// Default maximum number of items emitted per scan.
pub const DEFAULT_ITEM_CAP: usize = 30;

/// Display name and description for tags absent from the catalog.
pub const UNKNOWN_ITEM: (&str, &str) = ("Unknown Type", "Unknown data item");

// ── Item type catalog ──────────────────────────────────────────────

/// Look up the display name and description for a data item type tag.
///
/// The catalog is the D5FD data item dictionary; tags 200+ are the ARC
/// (Airline Reporting Corporation) range. Unknown tags return `None` and
/// render with a generic label — never an error.
pub fn item_type_info(tag: u8) -> Option<(&'static str, &'static str)> {
    match tag {
        1 => Some(("Transmission Control Number", "Control number for transmission")),
        2 => Some(("Passenger Name", "Name of the passenger")),
        4 => Some(("Group or Convention Name", "Group or convention identifier")),
        6 => Some(("Name Remarks", "Additional name information")),
        8 => Some(("Telephone Number", "Contact telephone number")),
        10 => Some(("TBM Mailing Address", "Ticket-by-mail mailing address")),
        12 => Some(("TBM Billing Address", "Ticket-by-mail billing address")),
        14 => Some(("Date Ticket Mailed", "Date ticket was mailed")),
        16 => Some(("Frequent Flyer Number", "Loyalty program number")),
        20 => Some(("Reprinted Ticket Numbers", "Numbers of reprinted tickets")),
        22 => Some(("Form of Payment", "Payment method details")),
        24 => Some(("Count of Psgrs Associated With FOP", "Number of passengers for this payment")),
        25 => Some(("Equivalent Fare Paid Decimal Indicator", "Decimal position indicator")),
        26 => Some(("Equivalent Fare Paid", "Equivalent fare amount")),
        28 => Some(("Equivalent Fare Paid Currency Code", "Currency for equivalent fare")),
        29 => Some(("Tkt/Doc Effective Date", "Document effective date")),
        30 => Some(("Tkt/Doc Expiration Date", "Document expiration date")),
        31 => Some(("Booking Class Limitation", "Class restrictions")),
        32 => Some(("Approval Code", "Payment approval code")),
        36 => Some(("Tour Code", "Tour package identifier")),
        38 => Some(("Number of Tickets Exchanged", "Count of exchanged tickets")),
        39 => Some(("Exchanged Ticket Value Decimal Indicator", "Decimal position for exchange value")),
        40 => Some(("Issued in Exchange for Ticket Number", "Original ticket number")),
        42 => Some(("Issued in Exchange for Coupon Numbers", "Original coupon numbers")),
        44 => Some(("Value of Exchanged Ticket", "Monetary value of exchange")),
        46 => Some(("Original Issue Ticket Number", "First issue ticket number")),
        48 => Some(("Date of Original Issue", "Original issue date")),
        50 => Some(("Place of Original Issue", "Original issue location")),
        52 => Some(("Form of Payment of Exchanged Ticket(s)", "Payment method for exchanged tickets")),
        54 => Some(("Exchanged Ticket Currency Code", "Currency for exchanged tickets")),
        56 => Some(("ATC/IATA Number", "Agent/airline identifier")),
        58 => Some(("Commission Rate", "Agent commission percentage")),
        60 => Some(("Total Amount Adjusted", "Total adjustment amount")),
        61 => Some(("PTA Amounts Decimal Indicator", "PTA decimal position")),
        62 => Some(("Count of MCO Numbers", "Number of MCO documents")),
        64 => Some(("MCO Number", "Miscellaneous charges order number")),
        66 => Some(("Original Fare Currency Code", "Original fare currency")),
        68 => Some(("Original PTA Total", "Original PTA amount")),
        70 => Some(("FOP of Each PTA", "Form of payment for each PTA")),
        71 => Some(("REPS DATA", "Credit card processing data")),
        72 => Some(("Fare Calculation", "Fare calculation details")),
        74 => Some(("Itinerary Segment Data", "Flight segment information")),
        76 => Some(("Fare Basis", "Fare basis code")),
        78 => Some(("Connecting/Stopover Code", "Connection/stopover indicator")),
        80 => Some(("Validity Dates", "Ticket validity dates")),
        82 => Some(("Seat Assignment", "Assigned seat information")),
        84 => Some(("Baggage Allowance", "Baggage allowance details")),
        86 => Some(("Endorsement Box/Penalty", "Endorsement and penalty information")),
        88 => Some(("Commission Amount", "Commission amount")),
        89 => Some(("Booking Class/Date", "Booking class and date")),
        90 => Some(("Reissue Tax Breakdown", "Tax breakdown for reissue")),
        93 => Some(("Reissue PFC Breakdown", "PFC breakdown for reissue")),
        94 => Some(("Tax Surcharge Data", "Fee information for Global Collect")),
        95 => Some(("Document Taxes", "Document tax information")),
        96 => Some(("GTO Commission Rate", "GTO commission rate")),
        97 => Some(("GTO Commission Amount", "GTO commission amount")),
        200 => Some(("Servicing Carrier Accounting Code", "ARC servicing carrier code")),
        202 => Some(("Servicing Carrier Guarantee Code", "ARC guarantee code")),
        204 => Some(("Agency Number (ATC/IATA)", "ARC agency number")),
        206 => Some(("Agency Number Check Digit", "ARC agency check digit")),
        208 => Some(("Credit Card Contractor Number", "ARC credit card contractor")),
        210 => Some(("Commission Rate", "ARC commission rate")),
        212 => Some(("Commission Amount", "ARC commission amount")),
        214 => Some(("Tax Code (Future)", "ARC future tax code")),
        216 => Some(("Ticketing Carrier Accounting Code", "ARC ticketing carrier code")),
        218 => Some(("Domestic/International Code", "ARC domestic/international indicator")),
        220 => Some(("Self-Sale Code", "ARC self-sale code")),
        _ => None,
    }
}

// ── Scan results ───────────────────────────────────────────────────

/// One decoded variable data item.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DataItem {
    /// Absolute offset of the item's type tag.
    pub offset: usize,
    /// Item type tag.
    pub tag: u8,
    /// Declared total length (tag + length field + payload).
    pub total_length: usize,
    /// Catalog name for the tag.
    pub name: &'static str,
    /// Catalog description for the tag.
    pub description: &'static str,
    /// Payload as uppercase hex.
    pub hex: String,
    /// Payload as display text.
    pub text: String,
}

/// Terminal state of an item scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ScanState {
    /// The end-marker tag was reached.
    End,
    /// The buffer ran out before a complete tag + length could be read.
    Exhausted,
    /// A declared length was invalid or overran the buffer.
    Truncated,
    /// The item cap was reached with data still remaining.
    Capped,
}

/// Result of scanning an item stream.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ItemScan {
    /// Items decoded, in stream order.
    pub items: Vec<DataItem>,
    /// Why the scan stopped.
    pub state: ScanState,
    /// Cursor position when the scan stopped.
    pub end_offset: usize,
}

// ── Scanner ────────────────────────────────────────────────────────

/// Single-pass scanner over a tagged-length-value item stream.
#[derive(Debug, Clone, Copy)]
pub struct ItemScanner {
    end_marker: u8,
    cap: usize,
}

impl ItemScanner {
    /// Create a scanner with the given end marker and item cap.
    pub fn new(end_marker: u8, cap: usize) -> Self {
        Self { end_marker, cap }
    }

    /// Scan the item stream starting at `start`.
    ///
    /// Deterministic for identical input and configuration; terminates in
    /// at most one pass over the buffer.
    pub fn scan(&self, buffer: &[u8], start: usize, page: &CodePage) -> ItemScan {
        let mut cursor = start;
        let mut items = Vec::new();

        let state = loop {
            if cursor >= buffer.len() {
                break ScanState::Exhausted;
            }
            let tag = buffer[cursor];
            if tag == self.end_marker {
                break ScanState::End;
            }
            // Zero tags are padding between items.
            if tag == 0 {
                cursor += 1;
                continue;
            }
            if cursor + 3 > buffer.len() {
                break ScanState::Exhausted;
            }
            let total_length =
                usize::from(u16::from_be_bytes([buffer[cursor + 1], buffer[cursor + 2]]));
            if total_length < 3 || cursor + total_length > buffer.len() {
                debug!(offset = cursor, tag, total_length, "malformed item length");
                break ScanState::Truncated;
            }
            let payload = &buffer[cursor + 3..cursor + total_length];
            let (name, description) = item_type_info(tag).unwrap_or(UNKNOWN_ITEM);
            items.push(DataItem {
                offset: cursor,
                tag,
                total_length,
                name,
                description,
                hex: hex_upper(payload),
                text: page.decode_display(payload),
            });
            cursor += total_length;
            if items.len() >= self.cap {
                break ScanState::Capped;
            }
        };

        ItemScan {
            items,
            state,
            end_offset: cursor,
        }
    }
}

impl Default for ItemScanner {
    fn default() -> Self {
        Self::new(END_MARKER, DEFAULT_ITEM_CAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barts_encoding::CP037;

    fn scan(buffer: &[u8]) -> ItemScan {
        ItemScanner::default().scan(buffer, 0, &CP037)
    }

    #[test]
    fn test_single_item_then_end_marker() {
        // tag=1, total=4, payload="A" (EBCDIC C1), then end marker
        let buf = [0x01, 0x00, 0x04, 0xC1, 0x4E];
        let result = scan(&buf);
        assert_eq!(result.state, ScanState::End);
        assert_eq!(result.items.len(), 1);
        let item = &result.items[0];
        assert_eq!(item.tag, 1);
        assert_eq!(item.total_length, 4);
        assert_eq!(item.hex, "C1");
        assert_eq!(item.text, "A");
        assert_eq!(item.name, "Transmission Control Number");
    }

    #[test]
    fn test_two_byte_payload_item() {
        // tag=1, total=5, payload="AB", then end marker
        let buf = [0x01, 0x00, 0x05, 0xC1, 0xC2, 0x4E];
        let result = scan(&buf);
        assert_eq!(result.state, ScanState::End);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].text, "AB");
    }

    #[test]
    fn test_zero_tag_padding_skipped() {
        let buf = [0x00, 0x00, 0x02, 0x00, 0x04, 0xC1, 0x4E];
        let result = scan(&buf);
        assert_eq!(result.state, ScanState::End);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].tag, 2);
        assert_eq!(result.items[0].offset, 3);
    }

    #[test]
    fn test_empty_buffer_is_exhausted() {
        let result = scan(&[]);
        assert_eq!(result.state, ScanState::Exhausted);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_tag_without_length_bytes_is_exhausted() {
        let buf = [0x01, 0x00];
        let result = scan(&buf);
        assert_eq!(result.state, ScanState::Exhausted);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_length_overrun_is_truncated() {
        // declared total 200 with only 6 bytes available
        let buf = [0x01, 0x00, 0xC8, 0xC1, 0xC2, 0xC3];
        let result = scan(&buf);
        assert_eq!(result.state, ScanState::Truncated);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_length_below_minimum_is_truncated() {
        let buf = [0x01, 0x00, 0x02, 0xC1, 0xC2];
        let result = scan(&buf);
        assert_eq!(result.state, ScanState::Truncated);
    }

    #[test]
    fn test_items_before_truncation_are_kept() {
        // one good item, then a bad length
        let buf = [0x01, 0x00, 0x04, 0xC1, 0x02, 0x00, 0x01];
        let result = scan(&buf);
        assert_eq!(result.state, ScanState::Truncated);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].tag, 1);
        assert_eq!(result.end_offset, 4);
    }

    #[test]
    fn test_item_cap_stops_scan() {
        // 5 minimal items, cap of 3
        let mut buf = Vec::new();
        for _ in 0..5 {
            buf.extend_from_slice(&[0x02, 0x00, 0x03]);
        }
        let result = ItemScanner::new(END_MARKER, 3).scan(&buf, 0, &CP037);
        assert_eq!(result.state, ScanState::Capped);
        assert_eq!(result.items.len(), 3);
    }

    #[test]
    fn test_unknown_tag_gets_generic_label() {
        let buf = [0xEE, 0x00, 0x03, 0x4E];
        let result = scan(&buf);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, UNKNOWN_ITEM.0);
        assert_eq!(result.state, ScanState::End);
    }

    #[test]
    fn test_custom_end_marker() {
        let buf = [0xFF];
        let result = ItemScanner::new(0xFF, DEFAULT_ITEM_CAP).scan(&buf, 0, &CP037);
        assert_eq!(result.state, ScanState::End);
    }

    #[test]
    fn test_start_past_buffer_is_exhausted() {
        let buf = [0x4E];
        let result = ItemScanner::default().scan(&buf, 10, &CP037);
        assert_eq!(result.state, ScanState::Exhausted);
    }

    #[test]
    fn test_catalog_lookup() {
        assert_eq!(item_type_info(22).unwrap().0, "Form of Payment");
        assert_eq!(item_type_info(220).unwrap().0, "Self-Sale Code");
        assert!(item_type_info(3).is_none());
    }
}
