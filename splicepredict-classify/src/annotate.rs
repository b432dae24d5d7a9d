use splicepredict_core::{Annotation, VariantRecord};

use crate::donor_gain::donor_gain;
use crate::native_loss::native_loss;
use crate::region::classify_region;

///
/// Derive the three splicing fields for one record.
///
/// Classification runs first; both evaluators then read the region and the record but
/// never each other's result.
///
pub fn annotate(record: &VariantRecord) -> Annotation {
    let splice_variant_type = classify_region(record);

    Annotation {
        splice_variant_type,
        native_loss: native_loss(record, splice_variant_type),
        donor_gain: donor_gain(record, splice_variant_type),
    }
}
