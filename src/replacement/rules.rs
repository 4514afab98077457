use serde::{Deserialize, Serialize};

/// A single rewrite: every search term found in the text becomes `target`.
///
/// Terms wrapped in slashes (`/nova.?14/`) are regular expression fragments,
/// anything else matches literally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementRule {
    pub target: String,

    #[serde(
        rename = "search",
        alias = "search_terms",
        alias = "toSearch",
        default
    )]
    pub search_terms: Vec<String>,
}

impl ReplacementRule {
    pub fn new<T, I, S>(target: T, search_terms: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            target: target.into(),
            search_terms: search_terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Length in chars of the longest search term
    pub fn longest_term_len(&self) -> usize {
        self.search_terms
            .iter()
            .map(|term| term.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Named group of rules; the unit of report attribution
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReplacementRuleSet {
    #[serde(default)]
    pub category: String,

    #[serde(alias = "replacements", default)]
    pub rules: Vec<ReplacementRule>,
}

impl ReplacementRuleSet {
    pub fn new(category: impl Into<String>, rules: Vec<ReplacementRule>) -> Self {
        Self {
            category: category.into(),
            rules,
        }
    }
}

/// Text consumed by a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementMatch {
    pub target: String,

    #[serde(alias = "toSearch")]
    pub matched_text: String,
}

/// Matches produced by one rule set, in the order they were found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementReport {
    pub category: String,

    #[serde(alias = "replacements")]
    pub matches: Vec<ReplacementMatch>,
}
