pub mod annotation;
pub mod column;
pub mod consequence;
pub mod record;

// re-export for cleaner imports
pub use self::annotation::{
    Annotation, DonorGain, GainQualifier, Grade, NativeLoss, SpliceVariantType,
};
pub use self::column::{Column, IndexedRow, RowView, Schema};
pub use self::consequence::ConsequenceSet;
pub use self::record::{RecordId, SpliceScores, VariantClass, VariantRecord};
