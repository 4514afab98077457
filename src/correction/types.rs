use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Phonetic,
}

/// One applied correction. `position` is the `[start, end)` range of word
/// indices the window covered in the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionDetail {
    pub original: String,
    pub corrected: String,
    pub position: (usize, usize),
    pub match_type: MatchType,
    pub similarity_score: f64,
    pub string_similarity: f64,
    pub phonetic_similarity: f64,
    pub length_penalty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResult {
    pub original_text: String,
    pub corrected_text: String,
    pub corrections: Vec<CorrectionDetail>,
}

impl CorrectionResult {
    pub fn unchanged(text: &str) -> Self {
        Self {
            original_text: text.to_string(),
            corrected_text: text.to_string(),
            corrections: Vec::new(),
        }
    }

    pub fn is_changed(&self) -> bool {
        self.original_text != self.corrected_text
    }

    /// Group identical original -> corrected pairs, first seen first.
    pub fn summary(&self) -> CorrectionSummary {
        let mut entries: Vec<SummaryEntry> = Vec::new();
        let mut index: HashMap<(&str, &str), usize> = HashMap::new();

        for detail in &self.corrections {
            let key = (detail.original.as_str(), detail.corrected.as_str());
            match index.get(&key) {
                Some(&i) => entries[i].occurrences += 1,
                None => {
                    index.insert(key, entries.len());
                    entries.push(SummaryEntry {
                        original: detail.original.clone(),
                        corrected: detail.corrected.clone(),
                        occurrences: 1,
                    });
                }
            }
        }

        CorrectionSummary {
            entries,
            total: self.corrections.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub original: String,
    pub corrected: String,
    pub occurrences: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionSummary {
    pub entries: Vec<SummaryEntry>,
    pub total: usize,
}
