use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::replacement::matcher::TermMatcher;
use crate::replacement::{
    ReplacementError, ReplacementFailure, ReplacementMatch, ReplacementReport, ReplacementRuleSet,
};

/// Category used in reports when a rule set has none
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Text after all rule sets ran, with one report per rule set that matched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementOutcome {
    pub text: String,
    pub reports: Vec<ReplacementReport>,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    target: String,
    matcher: TermMatcher,
}

/// A rule set compiled once and applied to any number of texts
#[derive(Debug, Clone)]
pub struct CompiledRuleSet {
    category: String,
    rules: Vec<CompiledRule>,
}

impl CompiledRuleSet {
    /// Compile every usable rule of `rule_set`.
    ///
    /// Rules without search terms or without a target are skipped. Rules are
    /// ordered by their longest search term so longer phrases win over the
    /// words they contain.
    pub fn compile(rule_set: &ReplacementRuleSet) -> Result<Self, ReplacementError> {
        let category = if rule_set.category.trim().is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            rule_set.category.clone()
        };

        let mut usable: Vec<_> = rule_set
            .rules
            .iter()
            .filter(|rule| !rule.search_terms.is_empty() && !rule.target.is_empty())
            .collect();
        usable.sort_by(|a, b| b.longest_term_len().cmp(&a.longest_term_len()));

        let mut rules = Vec::with_capacity(usable.len());
        for rule in usable {
            let matcher = TermMatcher::compile(&rule.search_terms).map_err(|err| {
                ReplacementError::InvalidPattern {
                    category: category.clone(),
                    target: rule.target.clone(),
                    term: err.term,
                    source: err.source,
                }
            })?;

            match matcher {
                Some(matcher) => rules.push(CompiledRule {
                    target: rule.target.clone(),
                    matcher,
                }),
                None => trace!("Rule for {:?} has only empty search terms", rule.target),
            }
        }

        debug!("Compiled {} rule(s) for category {}", rules.len(), category);
        Ok(Self { category, rules })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Apply each rule in turn to the running text.
    ///
    /// Returns the new text and a report when at least one match differed
    /// from its target.
    pub fn apply(&self, content: &str) -> (String, Option<ReplacementReport>) {
        let mut text = content.to_string();
        let mut matches = Vec::new();

        for rule in &self.rules {
            let ranges = rule.matcher.find_all(&text);
            if ranges.is_empty() {
                continue;
            }

            let mut replaced = String::with_capacity(text.len());
            let mut last = 0;
            for range in ranges {
                let matched = &text[range.clone()];
                if matched != rule.target {
                    trace!("{}: {:?} -> {:?}", self.category, matched, rule.target);
                    matches.push(ReplacementMatch {
                        target: rule.target.clone(),
                        matched_text: matched.to_string(),
                    });
                }
                replaced.push_str(&text[last..range.start]);
                replaced.push_str(&rule.target);
                last = range.end;
            }
            replaced.push_str(&text[last..]);
            text = replaced;
        }

        let report = (!matches.is_empty()).then(|| ReplacementReport {
            category: self.category.clone(),
            matches,
        });
        (text, report)
    }
}

/// Apply `rule_sets` in order, each on the output of the previous one.
///
/// Compilation is per rule set: when one fails, the failure carries the
/// output of the rule sets already applied.
pub fn apply_replacements(
    content: &str,
    rule_sets: &[ReplacementRuleSet],
) -> Result<ReplacementOutcome, ReplacementFailure> {
    let mut outcome = ReplacementOutcome {
        text: content.to_string(),
        reports: Vec::new(),
    };

    for (applied_sets, rule_set) in rule_sets.iter().enumerate() {
        let compiled = match CompiledRuleSet::compile(rule_set) {
            Ok(compiled) => compiled,
            Err(error) => {
                return Err(ReplacementFailure {
                    error,
                    applied_sets,
                    partial: outcome,
                })
            }
        };

        let (text, report) = compiled.apply(&outcome.text);
        outcome.text = text;
        outcome.reports.extend(report);
    }

    Ok(outcome)
}
