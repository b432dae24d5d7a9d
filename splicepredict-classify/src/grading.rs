use splicepredict_core::{Grade, NativeLoss};

use crate::consts::{SIGNIFICANT_LOSS_MIN, STRONG_SITE_THRESHOLD, WEAK_SITE_THRESHOLD};

///
/// Grade the weakening of a native site from the alternate-allele score and the score drop.
///
/// # Arguments
/// - alt: MaxEntScan score of the site with the alternate allele
/// - diff: `ref - alt`; positive means the site got weaker
///
pub fn grade(alt: f64, diff: f64) -> NativeLoss {
    if diff <= 0.0 {
        NativeLoss::Improved
    } else if alt < WEAK_SITE_THRESHOLD {
        if diff >= SIGNIFICANT_LOSS_MIN {
            NativeLoss::High
        } else {
            NativeLoss::ModerateBorderline
        }
    } else if alt > STRONG_SITE_THRESHOLD {
        NativeLoss::Low
    } else if diff >= SIGNIFICANT_LOSS_MIN {
        NativeLoss::Moderate
    } else {
        NativeLoss::Low
    }
}

///
/// Grade a candidate donor site by its score alone.
///
/// Both ends of the moderate band are inclusive.
///
pub fn amplitude(alt: f64) -> Grade {
    if alt > STRONG_SITE_THRESHOLD {
        Grade::High
    } else if alt < WEAK_SITE_THRESHOLD {
        Grade::Low
    } else {
        Grade::Moderate
    }
}
