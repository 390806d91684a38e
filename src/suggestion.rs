use std::cmp::Ordering;

/// Suggested correct spelling for a given input word.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suggestion {
    /// The suggested correctly spelled word.
    pub term: String,
    /// Edit distance between searched for word and suggestion.
    pub distance: usize,
    /// Frequency of suggestion in the dictionary (a measure of how common
    /// the word is). For compound suggestions this is an estimate on the
    /// same scale as the unigram counts.
    pub count: u64,
}

impl Suggestion {
    pub(crate) fn new(term: impl Into<String>, distance: usize, count: u64) -> Suggestion {
        Suggestion {
            term: term.into(),
            distance,
            count,
        }
    }

}

// Order by distance ascending, then by frequency count descending
impl Ord for Suggestion {
    fn cmp(&self, other: &Suggestion) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.count.cmp(&self.count))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Suggestion) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Suggestion {
    fn eq(&self, other: &Suggestion) -> bool {
        self.distance == other.distance && self.count == other.count
    }
}

impl Eq for Suggestion {}

/// Controls the closeness/quantity of returned spelling suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verbosity {
    /// Top suggestion with the highest term frequency of the suggestions of
    /// smallest edit distance found.
    Top,
    /// All suggestions of smallest edit distance found, ordered by term
    /// frequency.
    Closest,
    /// All suggestions within the edit distance budget, ordered by edit
    /// distance, then by term frequency (slower, no early termination).
    All,
}
