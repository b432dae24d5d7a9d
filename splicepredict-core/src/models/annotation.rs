use std::fmt::{self, Display};
use std::str::FromStr;

///
/// Splice-relevant region a variant falls in. Exactly one is assigned per record.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpliceVariantType {
    Unknown,
    LastExon,
    ExonicDonorSpliceRegion,
    ExonicAcceptorSpliceRegion,
    Check,
    IntronicDonorSpliceRegion,
    IntronicAcceptorSpliceRegion,
    OutsideNative,
}

impl SpliceVariantType {
    pub const ALL: [SpliceVariantType; 8] = [
        SpliceVariantType::Unknown,
        SpliceVariantType::LastExon,
        SpliceVariantType::ExonicDonorSpliceRegion,
        SpliceVariantType::ExonicAcceptorSpliceRegion,
        SpliceVariantType::Check,
        SpliceVariantType::IntronicDonorSpliceRegion,
        SpliceVariantType::IntronicAcceptorSpliceRegion,
        SpliceVariantType::OutsideNative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpliceVariantType::Unknown => "unknown",
            SpliceVariantType::LastExon => "last_exon",
            SpliceVariantType::ExonicDonorSpliceRegion => "Exonic_donor_splice_region",
            SpliceVariantType::ExonicAcceptorSpliceRegion => "Exonic_acceptor_splice_region",
            SpliceVariantType::Check => "check",
            SpliceVariantType::IntronicDonorSpliceRegion => "Intronic_donor_splice_region",
            SpliceVariantType::IntronicAcceptorSpliceRegion => "Intronic_acceptor_splice_region",
            SpliceVariantType::OutsideNative => "Outside_native",
        }
    }

    pub fn is_donor_region(&self) -> bool {
        matches!(
            self,
            SpliceVariantType::IntronicDonorSpliceRegion
                | SpliceVariantType::ExonicDonorSpliceRegion
        )
    }

    pub fn is_acceptor_region(&self) -> bool {
        matches!(
            self,
            SpliceVariantType::IntronicAcceptorSpliceRegion
                | SpliceVariantType::ExonicAcceptorSpliceRegion
        )
    }
}

impl Display for SpliceVariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SpliceVariantType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpliceVariantType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid splice variant type: {}", s))
    }
}

///
/// Amplitude of a candidate donor site, from its MaxEntScan score alone.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Grade {
    High,
    Moderate,
    Low,
}

impl Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::High => "HIGH",
            Grade::Moderate => "MODERATE",
            Grade::Low => "LOW",
        };
        write!(f, "{}", s)
    }
}

///
/// Severity of the weakening of the native splice site.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NativeLoss {
    Improved,
    High,
    Moderate,
    /// A small drop on an already weak site, close to the scoring noise floor.
    ModerateBorderline,
    Low,
}

impl Display for NativeLoss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NativeLoss::Improved => "IMPROVED",
            NativeLoss::High => "HIGH",
            NativeLoss::Moderate => "MODERATE",
            NativeLoss::ModerateBorderline => "MODERATE*",
            NativeLoss::Low => "LOW",
        };
        write!(f, "{}", s)
    }
}

///
/// Which native donor site(s) a gained donor outcompetes.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GainQualifier {
    Both,
    Downstream,
    Upstream,
    Intronic,
}

impl Display for GainQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GainQualifier::Both => "both",
            GainQualifier::Downstream => "downstream",
            GainQualifier::Upstream => "upstream",
            GainQualifier::Intronic => "intronic",
        };
        write!(f, "{}", s)
    }
}

///
/// Severity of a created or strengthened donor site, e.g. `MODERATE[upstream]`.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DonorGain {
    pub grade: Grade,
    pub qualifier: Option<GainQualifier>,
}

impl DonorGain {
    pub fn new(grade: Grade) -> Self {
        DonorGain {
            grade,
            qualifier: None,
        }
    }

    pub fn qualified(grade: Grade, qualifier: GainQualifier) -> Self {
        DonorGain {
            grade,
            qualifier: Some(qualifier),
        }
    }
}

impl From<Grade> for DonorGain {
    fn from(grade: Grade) -> Self {
        DonorGain::new(grade)
    }
}

impl Display for DonorGain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.qualifier {
            Some(q) => write!(f, "{}[{}]", self.grade, q),
            None => write!(f, "{}", self.grade),
        }
    }
}

///
/// The three fields derived for a record. `None` means not applicable.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub splice_variant_type: SpliceVariantType,
    pub native_loss: Option<NativeLoss>,
    pub donor_gain: Option<DonorGain>,
}

impl Annotation {
    ///
    /// Render the derived fields as output text, using `sentinel` for not applicable.
    ///
    pub fn to_fields(&self, sentinel: &str) -> [String; 3] {
        [
            self.splice_variant_type.to_string(),
            self.native_loss
                .map_or_else(|| sentinel.to_string(), |l| l.to_string()),
            self.donor_gain
                .map_or_else(|| sentinel.to_string(), |g| g.to_string()),
        ]
    }
}
