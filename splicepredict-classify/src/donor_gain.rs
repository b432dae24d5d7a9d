//! Grading of donor sites created or strengthened by a variant.
//!
//! A gained donor matters when it can outcompete a native donor, so most branches compare
//! the alternate-allele sliding-window score (`swa_donor_alt`) with the neighbouring native
//! donors found by the NCSS scan.

use splicepredict_core::{DonorGain, GainQualifier, Grade, SpliceVariantType, VariantRecord};

use crate::grading::amplitude;

///
/// Neighbouring native donor a donor-region SNV is compared with.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Neighbour {
    Upstream,
    Downstream,
}

/// Scores every competing-donor branch needs; `None` if any is missing.
struct Competition {
    alt: f64,
    diff: f64,
    upstream: f64,
    downstream: f64,
}

impl Competition {
    fn from_record(record: &VariantRecord) -> Option<Self> {
        let s = &record.scores;
        // every competing-donor branch needs a reference-complement window
        s.swa_donor_ref_comp?;
        Some(Competition {
            alt: s.swa_donor_alt?,
            diff: s.swa_donor_diff?,
            upstream: s.ncss_upstream_donor?,
            downstream: s.ncss_downstream_donor?,
        })
    }
}

fn native_region_gain(record: &VariantRecord, neighbour: Neighbour) -> Option<DonorGain> {
    let s = &record.scores;

    if !record.is_snv() {
        return s.swa_donor_alt.map(|alt| amplitude(alt).into());
    }

    let native = match neighbour {
        Neighbour::Upstream => s.ncss_upstream_donor?,
        Neighbour::Downstream => s.ncss_downstream_donor?,
    };
    let ref_comp = s.swa_donor_ref_comp?;

    // the best reference window is the native donor itself: nothing new was created
    if ref_comp == native {
        return Some(Grade::Low.into());
    }
    s.swa_donor_alt.map(|alt| amplitude(alt).into())
}

fn acceptor_region_gain(record: &VariantRecord) -> Option<DonorGain> {
    let c = Competition::from_record(record)?;
    if c.diff >= 0.0 {
        return Some(Grade::Low.into());
    }

    let gain = match amplitude(c.alt) {
        Grade::Moderate => {
            match (c.alt > c.downstream, c.alt > c.upstream) {
                (true, true) => DonorGain::qualified(Grade::Moderate, GainQualifier::Both),
                (true, false) => DonorGain::qualified(Grade::Moderate, GainQualifier::Downstream),
                (false, true) => DonorGain::qualified(Grade::Moderate, GainQualifier::Upstream),
                (false, false) => Grade::Low.into(),
            }
        }
        grade => grade.into(),
    };
    Some(gain)
}

fn outside_native_gain(record: &VariantRecord) -> Option<DonorGain> {
    let c = Competition::from_record(record)?;
    if c.diff >= 0.0 {
        return Some(Grade::Low.into());
    }

    let gain = match amplitude(c.alt) {
        Grade::Moderate if record.consequence.is_intronic() => {
            if c.alt > c.upstream {
                DonorGain::qualified(Grade::Moderate, GainQualifier::Intronic)
            } else {
                Grade::Low.into()
            }
        }
        grade => grade.into(),
    };
    Some(gain)
}

///
/// Grade the gain of a donor site competing with, or replacing, the native one.
///
/// Returns `None` for regions where a donor gain is not assessed (last exon, check,
/// unknown, intronic acceptor) and whenever a score the branch needs is missing.
///
/// # Arguments
/// - record: the normalized record
/// - region: the region assigned by [`classify_region`](crate::classify_region)
///
pub fn donor_gain(record: &VariantRecord, region: SpliceVariantType) -> Option<DonorGain> {
    match region {
        SpliceVariantType::IntronicDonorSpliceRegion => {
            native_region_gain(record, Neighbour::Upstream)
        }
        SpliceVariantType::ExonicDonorSpliceRegion => {
            native_region_gain(record, Neighbour::Downstream)
        }
        SpliceVariantType::ExonicAcceptorSpliceRegion => acceptor_region_gain(record),
        SpliceVariantType::OutsideNative => outside_native_gain(record),
        SpliceVariantType::LastExon
        | SpliceVariantType::Check
        | SpliceVariantType::Unknown
        | SpliceVariantType::IntronicAcceptorSpliceRegion => None,
    }
}
