//! Deterministic rewriting of known terms.
//!
//! Rule sets run in the order given, each on the output of the previous one.
//! Within a rule set, rules with longer search terms run first and every
//! search term only matches whole words.

mod engine;
mod error;
mod matcher;
mod rules;
mod statistics;
mod validation;

pub use engine::{apply_replacements, CompiledRuleSet, ReplacementOutcome, DEFAULT_CATEGORY};
pub use error::{ReplacementError, ReplacementFailure};
pub use matcher::{is_regex_term, is_word_char};
pub use rules::{ReplacementMatch, ReplacementReport, ReplacementRule, ReplacementRuleSet};
pub use statistics::{replacement_statistics, ReplacementCount, ReplacementStatistics};
pub use validation::{validate_rule_set, RuleIssue};
