//! Record classification and the body schema registry.
//!
//! Every D5FD record starts with a fixed 0x60-byte header; the 3-byte
//! BARTS record type at 0x020 selects which body layout follows. The
//! registry maps type codes to layouts, with aliases for codes that share
//! a shape (NBT files as TAR, VDC as AIR, CRR as COL). Codes absent from
//! the registry fall back to a raw hex preview of the body region.
//!
//! Two registry profiles exist because the recorded revisions of the
//! format disagree on two points: which shape the MAR code selects, and
//! the default blank-suppression policy. See [`SchemaProfile`].

mod tables;

pub use tables::{
    AIR_FIELDS, ATR_FIELDS, BOW_FIELDS, COL_FIELDS, HEADER_FIELDS, IFR_FIELDS, MAR_FIELDS,
    MIR_FIELDS, REF_FIELDS, TAR_FIELDS, VOI_FIELDS,
};

use std::collections::HashMap;
use std::sync::LazyLock;

use barts_encoding::CodePage;
use thiserror::Error;

use crate::config::BlankPolicy;
use crate::field::FieldDescriptor;

/// Offset of the record body (all body tables are relative to this).
pub const BODY_BASE: usize = 0x060;

/// Offset of the 3-byte record type discriminator within the header.
pub const TYPE_OFFSET: usize = 0x020;

/// Length of the record type discriminator.
pub const TYPE_LEN: usize = 3;

/// Sentinel returned when the buffer is too short to hold a type code.
pub const UNKNOWN_TYPE: &str = "UNK";

/// Maximum number of body bytes shown by the fallback raw preview.
pub const FALLBACK_PREVIEW_LEN: usize = 100;

// ── Classification ─────────────────────────────────────────────────

/// Extract the record type discriminator from a buffer.
///
/// Returns the EBCDIC-decoded, whitespace-trimmed 3-character code, or
/// [`UNKNOWN_TYPE`] when the buffer is too short. Never fails.
pub fn classify(buffer: &[u8], page: &CodePage) -> String {
    let end = TYPE_OFFSET + TYPE_LEN;
    if buffer.len() < end {
        return UNKNOWN_TYPE.to_string();
    }
    page.decode_display(&buffer[TYPE_OFFSET..end])
        .trim()
        .to_string()
}

// ── Shapes ─────────────────────────────────────────────────────────

/// The body layouts a record type can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum RecordShape {
    /// Ticket Accounting Record.
    Tar,
    /// Agent Transaction.
    Atr,
    /// Additional Collection.
    Air,
    /// In-Flight Sales.
    Ifr,
    /// List Transaction Data.
    Bow,
    /// Collection Report.
    Col,
    /// Miscellaneous Transaction Data.
    Mir,
    /// Prepaid Accounting Data.
    Mar,
    /// Void Transaction.
    Voi,
    /// Refund.
    Ref,
}

impl RecordShape {
    /// DSECT-style shape name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tar => "TAR",
            Self::Atr => "ATR",
            Self::Air => "AIR",
            Self::Ifr => "IFR",
            Self::Bow => "BOW",
            Self::Col => "COL",
            Self::Mir => "MIR",
            Self::Mar => "MAR",
            Self::Voi => "VOI",
            Self::Ref => "REF",
        }
    }

    /// Human-readable shape title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Tar => "Ticket Accounting Record",
            Self::Atr => "Agent Transaction",
            Self::Air => "Additional Collection",
            Self::Ifr => "In-Flight Sales",
            Self::Bow => "List Transaction Data",
            Self::Col => "Collection Report",
            Self::Mir => "Miscellaneous Transaction Data",
            Self::Mar => "Prepaid Accounting Data",
            Self::Voi => "Void Transaction",
            Self::Ref => "Refund",
        }
    }

    /// The shape's field table.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        match self {
            Self::Tar => TAR_FIELDS,
            Self::Atr => ATR_FIELDS,
            Self::Air => AIR_FIELDS,
            Self::Ifr => IFR_FIELDS,
            Self::Bow => BOW_FIELDS,
            Self::Col => COL_FIELDS,
            Self::Mir => MIR_FIELDS,
            Self::Mar => MAR_FIELDS,
            Self::Voi => VOI_FIELDS,
            Self::Ref => REF_FIELDS,
        }
    }
}

/// One body layout: a shape plus the variable-item region, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodySchema {
    /// The body shape.
    pub shape: RecordShape,
    /// Start of the variable data item region, relative to [`BODY_BASE`].
    pub item_offset: Option<usize>,
}

impl BodySchema {
    /// Absolute offset of the variable-item region, if declared.
    pub fn item_region(&self) -> Option<usize> {
        self.item_offset.map(|rel| BODY_BASE + rel)
    }
}

// ── Profiles ───────────────────────────────────────────────────────

/// Which recorded revision of the schema catalog to use.
///
/// The two revisions disagree on the MAR mapping and on the default
/// blank-suppression policy; everything else is shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SchemaProfile {
    /// Original catalog: MAR selects the MIR shape, PAR selects MAR and
    /// carries variable items; blank suppression treats all-zero fields
    /// as blank.
    Classic,
    /// Revised catalog: MAR and PAR both select the MAR shape with no
    /// variable items; blank suppression is space-only.
    #[default]
    Revised,
}

impl SchemaProfile {
    /// The blank-suppression policy this profile's reports default to.
    pub fn default_blank_policy(&self) -> BlankPolicy {
        match self {
            Self::Classic => BlankPolicy::SpaceOrZero,
            Self::Revised => BlankPolicy::SpaceOnly,
        }
    }
}

// ── Registry ───────────────────────────────────────────────────────

/// Alias groups: discriminators in one group must share a shape.
const ALIAS_GROUPS: &[&[&str]] = &[&["TAR", "NBT"], &["AIR", "VDC"], &["COL", "CRR"]];

// Variable items in a TAR body start at ND5FDTDF (body + 0x088).
const TAR_ITEM_OFFSET: usize = 0x088;
// Variable items in a PAR body start at ND5FDMDI (body + 0x370).
const PAR_ITEM_OFFSET: usize = 0x370;

/// Validation failures in the schema catalog.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A shape's field table is empty.
    #[error("shape {0} has no field descriptors")]
    EmptyShape(&'static str),

    /// A field descriptor with a zero-length byte range.
    #[error("field {field} in shape {shape} has zero length")]
    ZeroLengthField {
        shape: &'static str,
        field: &'static str,
    },

    /// Discriminators in one alias group resolve to different shapes.
    #[error("alias group containing '{discriminator}' maps to more than one shape")]
    AmbiguousAlias { discriminator: &'static str },
}

/// Immutable mapping from record type discriminators to body schemas.
///
/// Built once per profile; safe to share by reference across any number
/// of concurrent decode calls.
#[derive(Debug)]
pub struct SchemaRegistry {
    profile: SchemaProfile,
    map: HashMap<&'static str, BodySchema>,
}

static CLASSIC_REGISTRY: LazyLock<SchemaRegistry> =
    LazyLock::new(|| SchemaRegistry::new(SchemaProfile::Classic));
static REVISED_REGISTRY: LazyLock<SchemaRegistry> =
    LazyLock::new(|| SchemaRegistry::new(SchemaProfile::Revised));

impl SchemaRegistry {
    /// Build the registry for a profile.
    pub fn new(profile: SchemaProfile) -> Self {
        let mut map: HashMap<&'static str, BodySchema> = HashMap::new();
        let mut put = |codes: &[&'static str], shape: RecordShape, item_offset: Option<usize>| {
            for &code in codes {
                map.insert(
                    code,
                    BodySchema {
                        shape,
                        item_offset,
                    },
                );
            }
        };

        put(&["TAR", "NBT"], RecordShape::Tar, Some(TAR_ITEM_OFFSET));
        put(&["ATR"], RecordShape::Atr, None);
        put(&["AIR", "VDC"], RecordShape::Air, None);
        put(&["IFR"], RecordShape::Ifr, None);
        put(&["BOW"], RecordShape::Bow, None);
        put(&["COL", "CRR"], RecordShape::Col, None);
        put(&["VOI"], RecordShape::Voi, None);
        put(&["REF"], RecordShape::Ref, None);

        match profile {
            SchemaProfile::Classic => {
                put(&["MAR"], RecordShape::Mir, None);
                put(&["PAR"], RecordShape::Mar, Some(PAR_ITEM_OFFSET));
            }
            SchemaProfile::Revised => {
                put(&["MAR", "PAR"], RecordShape::Mar, None);
            }
        }

        let registry = Self { profile, map };
        debug_assert!(registry.validate().is_ok());
        registry
    }

    /// A process-wide shared registry for a profile.
    pub fn shared(profile: SchemaProfile) -> &'static SchemaRegistry {
        match profile {
            SchemaProfile::Classic => &CLASSIC_REGISTRY,
            SchemaProfile::Revised => &REVISED_REGISTRY,
        }
    }

    /// The profile this registry was built from.
    pub fn profile(&self) -> SchemaProfile {
        self.profile
    }

    /// Resolve a discriminator to its body schema.
    ///
    /// `None` routes the caller to the fallback raw-preview behavior.
    pub fn resolve(&self, discriminator: &str) -> Option<&BodySchema> {
        self.map.get(discriminator)
    }

    /// All registered discriminators, sorted.
    pub fn discriminators(&self) -> Vec<&'static str> {
        let mut codes: Vec<&'static str> = self.map.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    /// Check catalog invariants: non-empty shapes, non-zero field lengths,
    /// alias groups resolving to exactly one shape each.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for schema in self.map.values() {
            let fields = schema.shape.fields();
            if fields.is_empty() {
                return Err(SchemaError::EmptyShape(schema.shape.name()));
            }
            for field in fields {
                if field.len == 0 {
                    return Err(SchemaError::ZeroLengthField {
                        shape: schema.shape.name(),
                        field: field.name,
                    });
                }
            }
        }
        for group in ALIAS_GROUPS {
            let shapes: Vec<Option<RecordShape>> = group
                .iter()
                .map(|code| self.map.get(code).map(|s| s.shape))
                .collect();
            if shapes.windows(2).any(|w| w[0] != w[1]) {
                return Err(SchemaError::AmbiguousAlias {
                    discriminator: group[0],
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barts_encoding::CP037;

    #[test]
    fn test_classify_tar() {
        let mut buf = vec![0u8; 0x60];
        buf[TYPE_OFFSET..TYPE_OFFSET + 3].copy_from_slice(&CP037.encode("TAR").unwrap());
        assert_eq!(classify(&buf, &CP037), "TAR");
    }

    #[test]
    fn test_classify_trims_whitespace() {
        let mut buf = vec![0u8; 0x60];
        // "AB " — trailing EBCDIC space
        buf[TYPE_OFFSET..TYPE_OFFSET + 3].copy_from_slice(&[0xC1, 0xC2, 0x40]);
        assert_eq!(classify(&buf, &CP037), "AB");
    }

    #[test]
    fn test_classify_short_buffer_is_unknown() {
        assert_eq!(classify(&[], &CP037), UNKNOWN_TYPE);
        assert_eq!(classify(&[0u8; 0x22], &CP037), UNKNOWN_TYPE);
    }

    #[test]
    fn test_aliases_share_shape() {
        let registry = SchemaRegistry::new(SchemaProfile::Revised);
        assert_eq!(
            registry.resolve("TAR").unwrap().shape,
            registry.resolve("NBT").unwrap().shape
        );
        assert_eq!(
            registry.resolve("AIR").unwrap().shape,
            registry.resolve("VDC").unwrap().shape
        );
        assert_eq!(
            registry.resolve("COL").unwrap().shape,
            registry.resolve("CRR").unwrap().shape
        );
    }

    #[test]
    fn test_profiles_disagree_on_mar() {
        let classic = SchemaRegistry::new(SchemaProfile::Classic);
        let revised = SchemaRegistry::new(SchemaProfile::Revised);
        assert_eq!(classic.resolve("MAR").unwrap().shape, RecordShape::Mir);
        assert_eq!(revised.resolve("MAR").unwrap().shape, RecordShape::Mar);
    }

    #[test]
    fn test_par_items_only_in_classic() {
        let classic = SchemaRegistry::new(SchemaProfile::Classic);
        let revised = SchemaRegistry::new(SchemaProfile::Revised);
        assert_eq!(
            classic.resolve("PAR").unwrap().item_region(),
            Some(BODY_BASE + 0x370)
        );
        assert_eq!(revised.resolve("PAR").unwrap().item_region(), None);
    }

    #[test]
    fn test_tar_item_region_absolute_offset() {
        let registry = SchemaRegistry::new(SchemaProfile::Revised);
        assert_eq!(
            registry.resolve("TAR").unwrap().item_region(),
            Some(0x0E8)
        );
    }

    #[test]
    fn test_unknown_discriminator_unresolved() {
        let registry = SchemaRegistry::new(SchemaProfile::Revised);
        assert!(registry.resolve("ZZZ").is_none());
        assert!(registry.resolve("UNK").is_none());
    }

    #[test]
    fn test_both_profiles_validate() {
        assert!(SchemaRegistry::new(SchemaProfile::Classic).validate().is_ok());
        assert!(SchemaRegistry::new(SchemaProfile::Revised).validate().is_ok());
    }

    #[test]
    fn test_default_blank_policies() {
        assert_eq!(
            SchemaProfile::Classic.default_blank_policy(),
            BlankPolicy::SpaceOrZero
        );
        assert_eq!(
            SchemaProfile::Revised.default_blank_policy(),
            BlankPolicy::SpaceOnly
        );
    }

    #[test]
    fn test_shared_registries() {
        let a = SchemaRegistry::shared(SchemaProfile::Revised);
        let b = SchemaRegistry::shared(SchemaProfile::Revised);
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.profile(), SchemaProfile::Revised);
    }

    #[test]
    fn test_header_table_covers_fixed_header() {
        let last = HEADER_FIELDS.last().unwrap();
        assert_eq!(last.offset + last.len, BODY_BASE);
    }

    #[test]
    fn test_discriminators_sorted() {
        let registry = SchemaRegistry::new(SchemaProfile::Classic);
        let codes = registry.discriminators();
        assert!(codes.contains(&"TAR"));
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
    }
}
