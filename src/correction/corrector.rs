use tracing::{debug, info, trace};

use crate::correction::{
    ConfigError, CorrectionDetail, CorrectionResult, CorrectorSettings, MatchType,
};
use crate::phonetic::{spoken_form, PhoneticAlgorithm};
use crate::similarity::ratio;

/// Largest window, in words, considered as one candidate
const MAX_WINDOW: usize = 3;

#[derive(Debug, Clone)]
struct VocabularyEntry {
    term: String,
    lowercase: String,
    key: String,
}

/// Winning vocabulary entry for a window
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    entry: &'a VocabularyEntry,
    match_type: MatchType,
    score: f64,
    string_similarity: f64,
    phonetic_similarity: f64,
    length_penalty: f64,
}

/// Fuzzy correction of transcripts against a controlled vocabulary.
///
/// Word windows of three, two then one words are scored against every term
/// by a mix of string and phonetic similarity; the best term above the
/// threshold replaces the window. Accepted windows never overlap and longer
/// windows are tried first.
pub struct TextCorrector {
    algorithm: Box<dyn PhoneticAlgorithm>,
    settings: CorrectorSettings,
    vocabulary: Vec<VocabularyEntry>,
}

impl TextCorrector {
    pub fn new(
        algorithm: Box<dyn PhoneticAlgorithm>,
        settings: CorrectorSettings,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        info!(
            "Creating text corrector with {} (threshold {}, string weight {}, length weight {})",
            algorithm.name(),
            settings.threshold,
            settings.string_weight,
            settings.length_weight
        );

        Ok(Self {
            algorithm,
            settings,
            vocabulary: Vec::new(),
        })
    }

    pub fn with_vocabulary<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_vocabulary(terms);
        self
    }

    /// Replace the vocabulary and recompute the phonetic key of every term.
    /// Order is kept: on equal scores the earlier term wins.
    pub fn set_vocabulary<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = terms
            .into_iter()
            .map(Into::into)
            .map(|term: String| {
                let key = self.algorithm.encode(&spoken_form(&term));
                trace!("Vocabulary term {:?} has key {:?}", term, key);
                VocabularyEntry {
                    lowercase: term.to_lowercase(),
                    term,
                    key,
                }
            })
            .collect();
        info!("Loaded {} vocabulary terms", self.vocabulary.len());
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.iter().map(|entry| entry.term.as_str())
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn settings(&self) -> &CorrectorSettings {
        &self.settings
    }

    /// Correct `text` against the vocabulary.
    ///
    /// Words are re-joined with single spaces. Windows already equal to a
    /// term are kept without being reported.
    pub fn correct_text(&self, text: &str) -> CorrectionResult {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return CorrectionResult::unchanged(text);
        }

        let mut consumed = vec![false; words.len()];
        let mut output: Vec<Option<String>> =
            words.iter().map(|word| Some(word.to_string())).collect();
        let mut corrections = Vec::new();

        for size in (1..=MAX_WINDOW.min(words.len())).rev() {
            for start in 0..=words.len() - size {
                let end = start + size;
                if consumed[start..end].iter().any(|&taken| taken) {
                    continue;
                }

                let window = words[start..end].join(" ");
                let Some(candidate) = self.find_best_match(&window) else {
                    continue;
                };
                if candidate.score < self.settings.threshold {
                    continue;
                }

                consumed[start..end].iter_mut().for_each(|taken| *taken = true);
                output[start] = Some(candidate.entry.term.clone());
                output[start + 1..end].iter_mut().for_each(|slot| *slot = None);

                if window == candidate.entry.term {
                    continue;
                }

                debug!(
                    "Correcting {:?} -> {:?} ({:?}, score {:.3})",
                    window, candidate.entry.term, candidate.match_type, candidate.score
                );
                corrections.push(CorrectionDetail {
                    original: window,
                    corrected: candidate.entry.term.clone(),
                    position: (start, end),
                    match_type: candidate.match_type,
                    similarity_score: candidate.score,
                    string_similarity: candidate.string_similarity,
                    phonetic_similarity: candidate.phonetic_similarity,
                    length_penalty: candidate.length_penalty,
                });
            }
        }

        let corrected_text = output.into_iter().flatten().collect::<Vec<_>>().join(" ");

        CorrectionResult {
            original_text: text.to_string(),
            corrected_text,
            corrections,
        }
    }

    fn find_best_match(&self, window: &str) -> Option<Candidate<'_>> {
        if window.chars().count() < 2 {
            return None;
        }

        let lowercase = window.to_lowercase();
        if let Some(entry) = self.vocabulary.iter().find(|e| e.lowercase == lowercase) {
            trace!("Exact match for {:?}: {:?}", window, entry.term);
            return Some(Candidate {
                entry,
                match_type: MatchType::Exact,
                score: 1.0,
                string_similarity: 1.0,
                phonetic_similarity: 1.0,
                length_penalty: 1.0,
            });
        }

        let key = self.algorithm.encode(&spoken_form(window));
        let mut best: Option<Candidate<'_>> = None;

        for entry in &self.vocabulary {
            let string_similarity = ratio(&lowercase, &entry.lowercase);
            let phonetic_similarity = if key.is_empty() || entry.key.is_empty() {
                0.0
            } else {
                ratio(&key, &entry.key)
            };
            let combined = string_similarity * self.settings.string_weight
                + phonetic_similarity * self.settings.phonetic_weight();
            let length_penalty = self.length_penalty(&key, &entry.key);
            let score = combined * length_penalty;

            trace!(
                "{:?} vs {:?}: string {:.3}, phonetic {:.3} ({:?} vs {:?}), penalty {:.3}, score {:.3}",
                window,
                entry.term,
                string_similarity,
                phonetic_similarity,
                key,
                entry.key,
                length_penalty,
                score
            );

            let improves = best.map_or(true, |current| score > current.score);
            if score >= self.settings.threshold && improves {
                best = Some(Candidate {
                    entry,
                    match_type: MatchType::Phonetic,
                    score,
                    string_similarity,
                    phonetic_similarity,
                    length_penalty,
                });
            }
        }

        best
    }

    fn length_penalty(&self, key: &str, other: &str) -> f64 {
        let weight = self.settings.length_weight;
        if weight <= 0.0 || key.is_empty() || other.is_empty() {
            return 1.0;
        }
        let (a, b) = (key.chars().count() as f64, other.chars().count() as f64);
        (1.0 - weight) + weight * (a.min(b) / a.max(b))
    }
}
