//! # Core data model for splicepredict.
//!
//! This crate holds the typed representation of a VEP record annotated with MaxEntScan
//! scores, plus the normalizer that turns raw tab-delimited text into it. Everything
//! downstream (classification, grading, streaming) works on [`VariantRecord`] and never
//! touches raw text again.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use splicepredict_core::{normalize, RecordId, Column, SENTINEL};
//!
//! let mut row: HashMap<String, String> = Column::ALL
//!     .iter()
//!     .map(|c| (c.name().to_string(), SENTINEL.to_string()))
//!     .collect();
//! row.insert("VARIANT_CLASS".to_string(), "SNV".to_string());
//! row.insert("IntronStartOffset".to_string(), "3".to_string());
//!
//! let record = normalize(&row, RecordId::from_line(1), SENTINEL).unwrap();
//! assert!(record.variant_class.is_snv());
//! assert_eq!(record.intron_start_offset, Some(3));
//! assert_eq!(record.intron_end_offset, None);
//! ```
pub mod consts;
pub mod errors;
pub mod models;
pub mod normalize;

// re-exports
pub use consts::*;
pub use errors::*;
pub use models::*;
pub use normalize::*;
