use std::fmt;

use regex::Regex;

use crate::replacement::matcher::{is_regex_term, term_fragment};
use crate::replacement::ReplacementRuleSet;

/// A problem found in a rule set. None of these stop the engine; they point
/// at rules that will be skipped, never fire or fail to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleIssue {
    EmptyCategory,
    EmptyTarget { rule: usize },
    NoSearchTerms { rule: usize, target: String },
    EmptySearchTerm { rule: usize, target: String },
    NoOpTerm { rule: usize, target: String },
    InvalidPattern { rule: usize, target: String, term: String, message: String },
}

impl fmt::Display for RuleIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleIssue::EmptyCategory => write!(f, "rule set has no category"),
            RuleIssue::EmptyTarget { rule } => write!(f, "rule #{} has an empty target", rule + 1),
            RuleIssue::NoSearchTerms { rule, target } => {
                write!(f, "rule #{} ({:?}) has no search terms", rule + 1, target)
            }
            RuleIssue::EmptySearchTerm { rule, target } => {
                write!(f, "rule #{} ({:?}) has an empty search term", rule + 1, target)
            }
            RuleIssue::NoOpTerm { rule, target } => {
                write!(f, "rule #{} ({:?}) searches for its own target", rule + 1, target)
            }
            RuleIssue::InvalidPattern {
                rule,
                target,
                term,
                message,
            } => write!(
                f,
                "rule #{} ({:?}) has an invalid pattern {:?}: {}",
                rule + 1,
                target,
                term,
                message
            ),
        }
    }
}

/// Check a rule set for rules the engine would skip or reject.
pub fn validate_rule_set(rule_set: &ReplacementRuleSet) -> Vec<RuleIssue> {
    let mut issues = Vec::new();

    if rule_set.category.trim().is_empty() {
        issues.push(RuleIssue::EmptyCategory);
    }

    for (rule, entry) in rule_set.rules.iter().enumerate() {
        let target = entry.target.clone();

        if entry.target.is_empty() {
            issues.push(RuleIssue::EmptyTarget { rule });
        }
        if entry.search_terms.is_empty() {
            issues.push(RuleIssue::NoSearchTerms { rule, target });
            continue;
        }

        for term in &entry.search_terms {
            if term.is_empty() {
                issues.push(RuleIssue::EmptySearchTerm {
                    rule,
                    target: target.clone(),
                });
            } else if *term == entry.target {
                issues.push(RuleIssue::NoOpTerm {
                    rule,
                    target: target.clone(),
                });
            } else if is_regex_term(term) {
                if let Err(err) = Regex::new(&term_fragment(term)) {
                    issues.push(RuleIssue::InvalidPattern {
                        rule,
                        target: target.clone(),
                        term: term.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }
    }

    issues
}
