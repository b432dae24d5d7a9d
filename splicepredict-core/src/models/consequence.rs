use std::fmt::{self, Display};

use crate::consts::CONSEQUENCE_SEPARATORS;

///
/// The consequence terms VEP reports for one variant-transcript pair, e.g.
/// `splice_region_variant,intron_variant`.
///
/// Terms are matched by substring, so `is_splice` holds for `splice_donor_variant`,
/// `splice_region_variant`, `splice_donor_5th_base_variant` and friends.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsequenceSet {
    tags: Vec<String>,
}

impl ConsequenceSet {
    pub fn parse(text: &str) -> Self {
        let tags = text
            .split(CONSEQUENCE_SEPARATORS)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
        ConsequenceSet { tags }
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.tags.iter().any(|t| t.contains(term))
    }

    pub fn is_splice(&self) -> bool {
        self.contains_term("splice")
    }

    pub fn is_intronic(&self) -> bool {
        self.contains_term("intron")
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ConsequenceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ConsequenceSet {
            tags: iter.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

impl Display for ConsequenceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tags.join(","))
    }
}
