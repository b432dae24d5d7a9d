use std::fmt::{self, Display};

use super::consequence::ConsequenceSet;

///
/// Where a record came from, carried only for error reporting.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordId {
    pub line: Option<u64>,
    pub name: Option<String>,
    pub feature: Option<String>,
}

impl RecordId {
    pub fn from_line(line: u64) -> Self {
        RecordId {
            line: Some(line),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: Option<&str>) -> Self {
        self.name = name.map(String::from);
        self
    }

    pub fn with_feature(mut self, feature: Option<&str>) -> Self {
        self.feature = feature.map(String::from);
        self
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}", line)?,
            None => write!(f, "<unknown line>")?,
        }
        match (&self.name, &self.feature) {
            (Some(name), Some(feature)) => write!(f, " ({}, {})", name, feature),
            (Some(name), None) => write!(f, " ({})", name),
            (None, Some(feature)) => write!(f, " ({})", feature),
            (None, None) => Ok(()),
        }
    }
}

///
/// VEP `VARIANT_CLASS` (Sequence Ontology variant class).
///
/// Only the SNV / not-SNV distinction drives any decision: an indel shifts the fixed
/// MaxEntScan window, so sliding-window scores are used instead.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VariantClass {
    Snv,
    Insertion,
    Deletion,
    Indel,
    Substitution,
    SequenceAlteration,
    Other(String),
    #[default]
    Unspecified,
}

impl VariantClass {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "insertion" => VariantClass::Insertion,
            "deletion" => VariantClass::Deletion,
            "indel" => VariantClass::Indel,
            "substitution" => VariantClass::Substitution,
            "sequence_alteration" => VariantClass::SequenceAlteration,
            t if t.contains("SNV") => VariantClass::Snv,
            t => VariantClass::Other(t.to_string()),
        }
    }

    pub fn is_snv(&self) -> bool {
        matches!(self, VariantClass::Snv)
    }
}

///
/// MaxEntScan scores for one variant-transcript pair. `None` marks a score VEP could not
/// compute.
///
/// - `maxentscan_*`: the fixed window over the native splice site
/// - `swa_*`: the best window of a sliding scan around the variant; `*_ref_comp` is the
///   reference score at the window the alternate allele scored best in
/// - `ncss_*`: the nearest canonical (native) splice sites up- and downstream
///
/// `*_diff` is always `ref - alt` as reported by the plugin, so a positive diff weakens
/// the site.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpliceScores {
    pub maxentscan_ref: Option<f64>,
    pub maxentscan_alt: Option<f64>,
    pub maxentscan_diff: Option<f64>,

    pub swa_donor_ref: Option<f64>,
    pub swa_donor_alt: Option<f64>,
    pub swa_donor_ref_comp: Option<f64>,
    pub swa_donor_diff: Option<f64>,

    pub swa_acceptor_ref: Option<f64>,
    pub swa_acceptor_alt: Option<f64>,
    pub swa_acceptor_ref_comp: Option<f64>,
    pub swa_acceptor_diff: Option<f64>,

    pub ncss_upstream_donor: Option<f64>,
    pub ncss_downstream_donor: Option<f64>,
    pub ncss_upstream_acceptor: Option<f64>,
    pub ncss_downstream_acceptor: Option<f64>,
}

///
/// One normalized VEP row: typed, nullable, immutable once built.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariantRecord {
    pub id: RecordId,
    pub variant_class: VariantClass,
    pub consequence: ConsequenceSet,
    pub intron_start_offset: Option<i64>,
    pub intron_end_offset: Option<i64>,
    pub scores: SpliceScores,
}

impl VariantRecord {
    pub fn is_snv(&self) -> bool {
        self.variant_class.is_snv()
    }
}
