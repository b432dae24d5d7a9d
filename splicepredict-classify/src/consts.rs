// ENIGMA MaxEntScan cut-offs
pub const WEAK_SITE_THRESHOLD: f64 = 6.2;
pub const STRONG_SITE_THRESHOLD: f64 = 8.5;
pub const SIGNIFICANT_LOSS_MIN: f64 = 1.15;

// splice region windows (Burge et al.), in intronic bases from the exon boundary
pub const DONOR_REGION_INTRONIC_BASES: i64 = 6;
pub const ACCEPTOR_REGION_INTRONIC_BASES: i64 = 20;
