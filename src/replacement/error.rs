use thiserror::Error;

use crate::replacement::ReplacementOutcome;

/// Replacement engine errors
#[derive(Debug, Error)]
pub enum ReplacementError {
    #[error("invalid pattern {term:?} for target {target:?} in category {category:?}: {source}")]
    InvalidPattern {
        category: String,
        target: String,
        term: String,
        #[source]
        source: regex::Error,
    },
}

/// A rule set failed to compile part way through a run.
///
/// `partial` holds the text and reports produced by the `applied_sets` rule
/// sets that ran before the failing one.
#[derive(Debug, Error)]
#[error("replacement stopped after {applied_sets} rule set(s)")]
pub struct ReplacementFailure {
    #[source]
    pub error: ReplacementError,
    pub applied_sets: usize,
    pub partial: ReplacementOutcome,
}
