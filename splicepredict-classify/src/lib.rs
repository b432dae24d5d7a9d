//! Splicing impact classification for normalized VEP records.
//!
//! This crate is the decision engine of splicepredict. Given a [`VariantRecord`] it:
//!
//! - assigns the splice region the variant falls in ([`classify_region`])
//! - grades the loss of the native splice site ([`native_loss`])
//! - grades the gain of a competing donor site ([`donor_gain`])
//!
//! All three are pure and total: every record maps to a category and, for the two
//! evaluators, either a grade or `None` (not applicable).
//!
//! # Example
//!
//! ```
//! use splicepredict_classify::annotate;
//! use splicepredict_core::{ConsequenceSet, NativeLoss, SpliceScores, SpliceVariantType,
//!     VariantClass, VariantRecord};
//!
//! let record = VariantRecord {
//!     variant_class: VariantClass::Snv,
//!     consequence: ConsequenceSet::parse("splice_region_variant"),
//!     intron_start_offset: Some(3),
//!     intron_end_offset: Some(0),
//!     scores: SpliceScores {
//!         maxentscan_alt: Some(5.0),
//!         maxentscan_diff: Some(1.5),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! let annotation = annotate(&record);
//! assert_eq!(annotation.splice_variant_type, SpliceVariantType::IntronicDonorSpliceRegion);
//! assert_eq!(annotation.native_loss, Some(NativeLoss::High));
//! ```
//!
//! [`VariantRecord`]: splicepredict_core::VariantRecord
pub mod annotate;
pub mod consts;
pub mod donor_gain;
pub mod grading;
pub mod native_loss;
pub mod region;

// re-exports
pub use annotate::annotate;
pub use donor_gain::donor_gain;
pub use grading::{amplitude, grade};
pub use native_loss::native_loss;
pub use region::classify_region;
