use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid corrector tuning
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("string weight must be between 0 and 1, got {0}")]
    StringWeightOutOfRange(f64),

    #[error("length weight must be between 0 and 1, got {0}")]
    LengthWeightOutOfRange(f64),
}

/// Scoring parameters of the correction engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectorSettings {
    /// Minimum score for a candidate to be applied
    pub threshold: f64,
    /// Share of the plain string similarity in the score; the phonetic
    /// similarity gets the rest
    pub string_weight: f64,
    /// How strongly differing phonetic key lengths are penalized
    pub length_weight: f64,
}

impl Default for CorrectorSettings {
    fn default() -> Self {
        Self {
            threshold: 0.7,
            string_weight: 0.6,
            length_weight: 1.0,
        }
    }
}

impl CorrectorSettings {
    pub fn phonetic_weight(&self) -> f64 {
        1.0 - self.string_weight
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.string_weight) {
            return Err(ConfigError::StringWeightOutOfRange(self.string_weight));
        }
        if !(0.0..=1.0).contains(&self.length_weight) {
            return Err(ConfigError::LengthWeightOutOfRange(self.length_weight));
        }
        Ok(())
    }
}
