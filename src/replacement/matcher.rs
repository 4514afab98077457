//! Boundary-aware, case-insensitive matching of a rule's search terms.
//!
//! The regex crate has no look-around. The left boundary is checked by
//! inspecting the character before a candidate; the right boundary is part of
//! each anchored pattern, so alternations and quantifiers backtrack until the
//! term ends on a boundary. Unlike `\b` this works over all Unicode letters
//! and digits, so `ve` never matches inside `Genève`.

use std::ops::Range;

use regex::Regex;

/// Whether a search term is a `/regex/` fragment rather than a literal
pub fn is_regex_term(term: &str) -> bool {
    term.len() >= 2 && term.starts_with('/') && term.ends_with('/')
}

/// Regex fragment for a search term: the inner text of `/.../`, or the
/// escaped literal.
pub fn term_fragment(term: &str) -> String {
    if is_regex_term(term) {
        term[1..term.len() - 1].to_string()
    } else {
        regex::escape(term)
    }
}

/// Regex class of the characters accepted by [`is_word_char`]
const WORD_CHAR_CLASS: &str = r"\p{Alphabetic}\p{N}\x{0300}-\x{036F}\x{1AB0}-\x{1AFF}\x{1DC0}-\x{1DFF}\x{20D0}-\x{20FF}\x{FE20}-\x{FE2F}";

/// Characters that glue onto a word
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_combining_mark(c)
}

const fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |
        '\u{1AB0}'..='\u{1AFF}' |
        '\u{1DC0}'..='\u{1DFF}' |
        '\u{20D0}'..='\u{20FF}' |
        '\u{FE20}'..='\u{FE2F}'
    )
}

/// A term that failed to compile
#[derive(Debug)]
pub struct TermError {
    pub term: String,
    pub source: regex::Error,
}

/// Matches any of a rule's terms as whole words
#[derive(Debug, Clone)]
pub struct TermMatcher {
    /// All alternatives, longest fragment first, used to locate candidates
    combined: Regex,
    /// Each alternative anchored at the candidate start and followed by a
    /// boundary, same order. Group 1 is the term itself.
    anchored: Vec<Regex>,
}

impl TermMatcher {
    /// Compile non-empty `terms`. Returns `Ok(None)` when there is nothing to match.
    pub fn compile(terms: &[String]) -> Result<Option<Self>, TermError> {
        let mut fragments = Vec::new();
        for term in terms.iter().filter(|term| !term.is_empty()) {
            let fragment = term_fragment(term);
            let anchored = Regex::new(&format!(
                "(?i)^((?:{}))(?:[^{}]|$)",
                fragment, WORD_CHAR_CLASS
            ))
            .map_err(|source| TermError {
                term: term.clone(),
                source,
            })?;
            fragments.push((term, fragment, anchored));
        }

        if fragments.is_empty() {
            return Ok(None);
        }

        // stable: equal lengths keep the order the terms were given in
        fragments.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

        let alternation = fragments
            .iter()
            .map(|(_, fragment, _)| format!("(?:{})", fragment))
            .collect::<Vec<_>>()
            .join("|");
        let combined = Regex::new(&format!("(?i){}", alternation)).map_err(|source| TermError {
            term: fragments[0].0.clone(),
            source,
        })?;

        Ok(Some(Self {
            combined,
            anchored: fragments.into_iter().map(|(_, _, regex)| regex).collect(),
        }))
    }

    /// Non-overlapping whole-word matches, left to right.
    ///
    /// At each candidate start the longest alternative whose end falls on a
    /// word boundary wins; empty matches are ignored.
    pub fn find_all(&self, text: &str) -> Vec<Range<usize>> {
        let mut found = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some(candidate) = self.combined.find_at(text, pos) else {
                break;
            };
            let start = candidate.start();

            match self.match_at(text, start) {
                Some(end) => {
                    found.push(start..end);
                    pos = end;
                }
                None => {
                    pos = match text[start..].chars().next() {
                        Some(c) => start + c.len_utf8(),
                        None => break,
                    };
                }
            }
        }

        found
    }

    fn match_at(&self, text: &str, start: usize) -> Option<usize> {
        let before = text[..start].chars().next_back();
        if before.is_some_and(is_word_char) {
            return None;
        }

        let rest = &text[start..];
        self.anchored.iter().find_map(|regex| {
            let term = regex.captures(rest)?.get(1)?;
            (!term.is_empty()).then_some(start + term.end())
        })
    }
}
