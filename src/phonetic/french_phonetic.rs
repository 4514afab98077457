use crate::phonetic::french::spoken_words;
use crate::phonetic::PhoneticAlgorithm;

/// Lightweight French encoder: accent folding plus spoken-form spelling.
///
/// Keeps vowels, so it stays close to the written word and mostly absorbs
/// transcription artifacts such as accents, spelled-out acronyms and
/// symbols.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchPhonetic;

impl FrenchPhonetic {
    pub fn new() -> Self {
        Self
    }
}

impl PhoneticAlgorithm for FrenchPhonetic {
    fn encode(&self, text: &str) -> String {
        spoken_words(text)
            .into_iter()
            .map(|word| match word.as_str() {
                "plusse" | "pluss" => "plus".to_string(),
                _ => word,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn name(&self) -> &'static str {
        "FrenchPhonetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spoken_acronym_matches_written_form() {
        let encoder = FrenchPhonetic::new();
        assert_eq!(encoder.encode("tépéjé plusse"), "tepeje plus");
        assert_eq!(encoder.encode("tpg plus"), "tepeje plus");
    }

    #[test]
    fn test_words_are_joined_with_single_spaces() {
        let encoder = FrenchPhonetic::new();
        assert_eq!(encoder.encode("  Hafas,   NextGen "), "hafas nextgen");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(FrenchPhonetic::new().encode(""), "");
    }
}
