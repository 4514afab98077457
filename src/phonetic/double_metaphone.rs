//! Double Metaphone keys backed by `rphonetic`.
//!
//! The correction engine only scores the primary code; the alternate is
//! exposed for callers that want both.

use rphonetic::DoubleMetaphone as MetaphoneEncoder;

use crate::phonetic::PhoneticAlgorithm;

/// Long enough that multi-word phrases keep their full code.
const UNBOUNDED_CODE_LENGTH: usize = 64;

/// Primary and alternate Double Metaphone codes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaphoneCodes {
    pub primary: String,
    pub alternate: String,
}

/// Double Metaphone encoder. Codes are not truncated unless a maximum is set.
pub struct DoubleMetaphone {
    encoder: MetaphoneEncoder,
}

impl Default for DoubleMetaphone {
    fn default() -> Self {
        Self::new()
    }
}

impl DoubleMetaphone {
    pub fn new() -> Self {
        Self::with_max_code_length(UNBOUNDED_CODE_LENGTH)
    }

    /// Truncate both codes to `max` chars, as the classic reference does with 4.
    pub fn with_max_code_length(max: usize) -> Self {
        Self {
            encoder: MetaphoneEncoder::new(Some(max)),
        }
    }

    /// Compute both codes for `text`.
    pub fn codes(&self, text: &str) -> MetaphoneCodes {
        let text = text.trim();
        if text.is_empty() {
            return MetaphoneCodes::default();
        }

        let result = self.encoder.double_metaphone(text);
        MetaphoneCodes {
            primary: result.primary().to_string(),
            alternate: result.alternate().to_string(),
        }
    }
}

impl PhoneticAlgorithm for DoubleMetaphone {
    fn encode(&self, text: &str) -> String {
        self.codes(text).primary
    }

    fn name(&self) -> &'static str {
        "DoubleMetaphone"
    }
}
