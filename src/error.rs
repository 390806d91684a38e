use thiserror::Error;

/// Errors reported at the lookup call boundary.
///
/// These are caller precondition violations, never search outcomes: finding
/// no suggestion within the budget is normal data (an empty result list or a
/// synthetic unknown suggestion), not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The requested edit distance exceeds the maximum the delete index was
    /// built for. The index is only complete up to the construction-time
    /// bound, so clamping silently would mask caller bugs around distance
    /// budgets the index cannot actually serve.
    #[error("lookup edit distance {requested} exceeds dictionary maximum {max}")]
    DistanceBudget { requested: usize, max: usize },

    /// The unigram lexicon contains no words; lookups are meaningless.
    #[error("the unigram lexicon is empty")]
    EmptyLexicon,
}

pub type Result<T> = std::result::Result<T, LookupError>;
