#![forbid(unsafe_code)]
//! BARTS D5FD transaction record decoding.
//!
//! Reconstructs record buffers from hexdump text captures and decodes
//! them against the static D5FD schema catalog:
//!
//! - **Hexdump codec** — contiguous and addressed dump layouts, with
//!   auto-detection ([`hexdump`])
//! - **Classification** — the 3-byte record type discriminator selects a
//!   body layout from the [`schema`] registry
//! - **Field decoding** — fixed-layout header and body fields with
//!   per-kind rendering and blank suppression ([`field`])
//! - **Variable items** — the tagged-length-value item stream some
//!   layouts carry after their fixed fields ([`items`])
//! - **Reports** — the assembled [`report::DecodedReport`], serializable
//!   with `serde`
//!
//! The top-level entry point is [`decode`].

pub mod config;
pub mod error;
pub mod field;
pub mod hexdump;
pub mod items;
pub mod report;
pub mod schema;

pub use config::{BlankPolicy, DecodeConfig};
pub use error::DecodeError;
pub use field::{FieldDescriptor, FieldKind, ParsedField};
pub use hexdump::DumpFormat;
pub use items::{DataItem, ItemScan, ItemScanner, ScanState};
pub use report::{decode, DecodedReport};
pub use schema::{RecordShape, SchemaProfile, SchemaRegistry};
