use splicepredict_core::{NativeLoss, SpliceVariantType, VariantRecord};

use crate::grading::grade;

///
/// Pick the `(alt, diff)` pair that describes the native site of this record.
///
/// SNVs keep the fixed MaxEntScan window aligned with the native site; any other class
/// shifts it, so the sliding-window scores of the matching site type are used instead.
///
fn native_scores(
    record: &VariantRecord,
    region: SpliceVariantType,
) -> Option<(Option<f64>, Option<f64>)> {
    let scores = &record.scores;

    if record.is_snv() && (region.is_donor_region() || region.is_acceptor_region()) {
        Some((scores.maxentscan_alt, scores.maxentscan_diff))
    } else if region.is_donor_region() {
        Some((scores.swa_donor_alt, scores.swa_donor_diff))
    } else if region.is_acceptor_region() {
        Some((scores.swa_acceptor_alt, scores.swa_acceptor_diff))
    } else {
        None
    }
}

///
/// Grade the loss of the native splice site.
///
/// Returns `None` outside the four donor/acceptor splice regions, and whenever the
/// alternate score or the diff is missing.
///
pub fn native_loss(record: &VariantRecord, region: SpliceVariantType) -> Option<NativeLoss> {
    match native_scores(record, region)? {
        (Some(alt), Some(diff)) => Some(grade(alt, diff)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use splicepredict_core::{SpliceScores, VariantClass};

    #[fixture]
    fn scores() -> SpliceScores {
        SpliceScores {
            maxentscan_alt: Some(5.0),
            maxentscan_diff: Some(1.5),
            swa_donor_alt: Some(7.0),
            swa_donor_diff: Some(0.5),
            swa_acceptor_alt: Some(9.3),
            swa_acceptor_diff: Some(-1.2),
            ..Default::default()
        }
    }

    fn record(variant_class: VariantClass, scores: SpliceScores) -> VariantRecord {
        VariantRecord {
            variant_class,
            scores,
            ..Default::default()
        }
    }

    #[rstest]
    #[case(SpliceVariantType::IntronicDonorSpliceRegion)]
    #[case(SpliceVariantType::ExonicDonorSpliceRegion)]
    #[case(SpliceVariantType::IntronicAcceptorSpliceRegion)]
    #[case(SpliceVariantType::ExonicAcceptorSpliceRegion)]
    fn test_snv_uses_fixed_window(scores: SpliceScores, #[case] region: SpliceVariantType) {
        let r = record(VariantClass::Snv, scores);
        assert_eq!(native_loss(&r, region), Some(NativeLoss::High));
    }

    #[rstest]
    fn test_indel_donor_uses_sliding_window(scores: SpliceScores) {
        let r = record(VariantClass::Deletion, scores);
        assert_eq!(
            native_loss(&r, SpliceVariantType::IntronicDonorSpliceRegion),
            Some(NativeLoss::Low)
        );
    }

    #[rstest]
    fn test_indel_acceptor_uses_sliding_window(scores: SpliceScores) {
        let r = record(VariantClass::Insertion, scores);
        assert_eq!(
            native_loss(&r, SpliceVariantType::ExonicAcceptorSpliceRegion),
            Some(NativeLoss::Improved)
        );
    }

    #[rstest]
    #[case(SpliceVariantType::LastExon)]
    #[case(SpliceVariantType::Check)]
    #[case(SpliceVariantType::Unknown)]
    #[case(SpliceVariantType::OutsideNative)]
    fn test_not_applicable_regions(scores: SpliceScores, #[case] region: SpliceVariantType) {
        let r = record(VariantClass::Snv, scores);
        assert_eq!(native_loss(&r, region), None);
    }

    #[rstest]
    fn test_missing_diff_is_not_applicable(mut scores: SpliceScores) {
        scores.maxentscan_diff = None;
        let r = record(VariantClass::Snv, scores);
        assert_eq!(
            native_loss(&r, SpliceVariantType::IntronicAcceptorSpliceRegion),
            None
        );
    }

    #[rstest]
    fn test_unspecified_class_is_treated_as_indel(mut scores: SpliceScores) {
        scores.swa_donor_alt = None;
        let r = record(VariantClass::Unspecified, scores);
        assert_eq!(
            native_loss(&r, SpliceVariantType::ExonicDonorSpliceRegion),
            None
        );
    }
}
