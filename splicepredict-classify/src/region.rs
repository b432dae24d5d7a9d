//! Assignment of a variant to a splice region.

use splicepredict_core::{SpliceVariantType, VariantRecord};

use crate::consts::{ACCEPTOR_REGION_INTRONIC_BASES, DONOR_REGION_INTRONIC_BASES};

///
/// Classify a variant exactly on an exon boundary with a splice consequence.
///
/// The native donor/acceptor score from the sliding scan is compared with the nearest
/// canonical site; equality means the scanned window is the native site itself.
///
fn classify_boundary(record: &VariantRecord) -> SpliceVariantType {
    let scores = &record.scores;

    // no flanking exon on one side, so the scan windows are undefined
    let (Some(downstream_donor), Some(upstream_acceptor)) =
        (scores.ncss_downstream_donor, scores.ncss_upstream_acceptor)
    else {
        return SpliceVariantType::LastExon;
    };

    if scores.swa_donor_ref == Some(downstream_donor) {
        SpliceVariantType::ExonicDonorSpliceRegion
    } else if scores.swa_acceptor_ref == Some(upstream_acceptor) {
        SpliceVariantType::ExonicAcceptorSpliceRegion
    } else {
        SpliceVariantType::Check
    }
}

///
/// Assign exactly one [`SpliceVariantType`] to a record.
///
/// Rules are tried in a fixed order and the first match wins:
///
/// 1. missing intron offset: `Unknown`
/// 2. on the boundary (`0`/`0`) with a splice consequence: exonic donor, exonic acceptor,
///    `LastExon` or `Check`
/// 3. 1..=6 bases into the intron after the exon: intronic donor
/// 4. 1..=20 bases into the intron before the exon: intronic acceptor
/// 5. start `0`, end positive: intronic donor
/// 6. start negative, end `0`: intronic acceptor
/// 7. anything else: `OutsideNative`
///
pub fn classify_region(record: &VariantRecord) -> SpliceVariantType {
    let (Some(start), Some(end)) = (record.intron_start_offset, record.intron_end_offset) else {
        return SpliceVariantType::Unknown;
    };

    match (start, end) {
        (0, 0) if record.consequence.is_splice() => classify_boundary(record),
        (s, _) if 0 < s && s <= DONOR_REGION_INTRONIC_BASES => {
            SpliceVariantType::IntronicDonorSpliceRegion
        }
        (s, _) if -ACCEPTOR_REGION_INTRONIC_BASES <= s && s < 0 => {
            SpliceVariantType::IntronicAcceptorSpliceRegion
        }
        (0, e) if e > 0 => SpliceVariantType::IntronicDonorSpliceRegion,
        (s, 0) if s < 0 => SpliceVariantType::IntronicAcceptorSpliceRegion,
        _ => SpliceVariantType::OutsideNative,
    }
}
