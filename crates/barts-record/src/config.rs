//! Decode configuration.
//!
//! One immutable [`DecodeConfig`] is passed per decode call; nothing here
//! is process-global or mutable. The schema profile lives on the
//! [`SchemaRegistry`](crate::schema::SchemaRegistry) instead, since it
//! selects which static tables the registry is built from.

use crate::hexdump::DumpFormat;
use crate::items::{DEFAULT_ITEM_CAP, END_MARKER};

/// Predicate deciding when a field's raw bytes are "blank" and the field
/// is suppressed from the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BlankPolicy {
    /// All bytes are the EBCDIC space (0x40).
    #[default]
    SpaceOnly,
    /// All bytes are the EBCDIC space, or all bytes are zero.
    SpaceOrZero,
}

/// Per-call decode configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DecodeConfig {
    /// Force a hexdump layout instead of auto-detecting.
    pub format: Option<DumpFormat>,
    /// Blank-suppression predicate; `None` uses the registry profile's
    /// default.
    pub blank_policy: Option<BlankPolicy>,
    /// Maximum number of variable data items to emit before reporting
    /// truncation-by-cap.
    pub item_cap: usize,
    /// Item-type tag reserved as the end-of-stream marker.
    pub end_marker: u8,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            format: None,
            blank_policy: None,
            item_cap: DEFAULT_ITEM_CAP,
            end_marker: END_MARKER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DecodeConfig::default();
        assert_eq!(config.item_cap, 30);
        assert_eq!(config.end_marker, 0x4E);
        assert!(config.format.is_none());
        assert!(config.blank_policy.is_none());
    }
}
