//! Loading rule sets and vocabulary lists from files.
//!
//! The format is picked from the extension: `.toml`, `.json`, anything else
//! is plain text (vocabulary only).

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::replacement::ReplacementRuleSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
    Text,
}

impl Format {
    fn of(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => Format::Toml,
            Some("json") => Format::Json,
            _ => Format::Text,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RuleDocument {
    rule_sets: Vec<ReplacementRuleSet>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonRules {
    Many(Vec<ReplacementRuleSet>),
    Document(RuleDocument),
    Single(ReplacementRuleSet),
}

#[derive(Debug, Deserialize)]
struct VocabularyDocument {
    #[serde(default)]
    terms: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonVocabulary {
    Terms(Vec<String>),
    Document(VocabularyDocument),
}

/// Parse rule sets from a TOML or JSON document.
pub fn parse_rule_sets(content: &str, json: bool) -> Result<Vec<ReplacementRuleSet>> {
    if json {
        let parsed: JsonRules =
            serde_json::from_str(content).context("Failed to parse JSON rule sets")?;
        Ok(match parsed {
            JsonRules::Many(rule_sets) => rule_sets,
            JsonRules::Document(document) => document.rule_sets,
            JsonRules::Single(rule_set) => vec![rule_set],
        })
    } else {
        let document: RuleDocument =
            toml::from_str(content).context("Failed to parse TOML rule sets")?;
        Ok(document.rule_sets)
    }
}

/// Load the rule sets of one file.
pub fn load_rule_sets(path: &Path) -> Result<Vec<ReplacementRuleSet>> {
    let format = Format::of(path);
    if format == Format::Text {
        bail!(
            "Unsupported rule file {:?}: expected a .toml or .json extension",
            path
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rule file {:?}", path))?;
    let rule_sets = parse_rule_sets(&content, format == Format::Json)
        .with_context(|| format!("Invalid rule file {:?}", path))?;

    debug!("Loaded {} rule set(s) from {:?}", rule_sets.len(), path);
    Ok(rule_sets)
}

/// Load and concatenate the rule sets of several files, in order.
pub fn load_all_rule_sets<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<ReplacementRuleSet>> {
    let mut rule_sets = Vec::new();
    for path in paths {
        rule_sets.extend(load_rule_sets(path.as_ref())?);
    }
    Ok(rule_sets)
}

/// Terms of a plain-text list: one per line, blanks and `#` comments skipped.
pub fn parse_vocabulary_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn load_vocabulary_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read vocabulary file {:?}", path))?;

    let terms = match Format::of(path) {
        Format::Toml => {
            let document: VocabularyDocument = toml::from_str(&content)
                .with_context(|| format!("Invalid vocabulary file {:?}", path))?;
            document.terms
        }
        Format::Json => {
            let parsed: JsonVocabulary = serde_json::from_str(&content)
                .with_context(|| format!("Invalid vocabulary file {:?}", path))?;
            match parsed {
                JsonVocabulary::Terms(terms) => terms,
                JsonVocabulary::Document(document) => document.terms,
            }
        }
        Format::Text => parse_vocabulary_text(&content),
    };

    debug!("Loaded {} term(s) from {:?}", terms.len(), path);
    Ok(terms)
}

/// Load vocabulary files in order. Terms are trimmed, empty ones dropped and
/// only the first occurrence of a term is kept.
pub fn load_vocabulary<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut vocabulary = Vec::new();

    for path in paths {
        for term in load_vocabulary_file(path.as_ref())? {
            let term = term.trim().to_string();
            if !term.is_empty() && seen.insert(term.clone()) {
                vocabulary.push(term);
            }
        }
    }

    Ok(vocabulary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_rule_sets() {
        let content = r#"
[[rule_sets]]
category = "Speakers"

[[rule_sets.rules]]
target = "John Smith"
search = ["John", "Johnny"]

[[rule_sets.rules]]
target = "Jane Doe"
search_terms = ["Jane"]
"#;
        let rule_sets = parse_rule_sets(content, false).unwrap();

        assert_eq!(rule_sets.len(), 1);
        assert_eq!(rule_sets[0].category, "Speakers");
        assert_eq!(rule_sets[0].rules.len(), 2);
        assert_eq!(rule_sets[0].rules[1].search_terms, vec!["Jane"]);
    }

    #[test]
    fn test_parse_json_shapes() {
        let single = r#"{"category": "Names", "replacements": [{"target": "Robert", "toSearch": ["Bob"]}]}"#;
        let rule_sets = parse_rule_sets(single, true).unwrap();
        assert_eq!(rule_sets.len(), 1);
        assert_eq!(rule_sets[0].rules[0].search_terms, vec!["Bob"]);

        let many = r#"[{"category": "A", "rules": []}, {"category": "B", "rules": []}]"#;
        assert_eq!(parse_rule_sets(many, true).unwrap().len(), 2);

        let document = r#"{"rule_sets": [{"category": "A", "rules": []}]}"#;
        let rule_sets = parse_rule_sets(document, true).unwrap();
        assert_eq!(rule_sets[0].category, "A");
    }

    #[test]
    fn test_toml_without_rule_sets_is_rejected() {
        assert!(parse_rule_sets("title = \"rules\"", false).is_err());
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_rule_sets("{not json", true).is_err());
    }

    #[test]
    fn test_parse_vocabulary_text() {
        let content = "# products\nTPG+\n\n  NextGen  \n# end\nHafas\n";
        assert_eq!(
            parse_vocabulary_text(content),
            vec!["TPG+", "NextGen", "Hafas"]
        );
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::of(Path::new("rules.TOML")), Format::Toml);
        assert_eq!(Format::of(Path::new("rules.json")), Format::Json);
        assert_eq!(Format::of(Path::new("terms.txt")), Format::Text);
        assert_eq!(Format::of(Path::new("terms")), Format::Text);
    }
}
