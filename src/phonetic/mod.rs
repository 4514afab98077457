mod double_metaphone;
mod french;
mod french_phonetic;
mod french_skeleton;
mod phonetic_algorithm;
mod registry;

pub use double_metaphone::{DoubleMetaphone, MetaphoneCodes};
pub use french_phonetic::FrenchPhonetic;
pub use french_skeleton::FrenchSkeleton;
pub use phonetic_algorithm::PhoneticAlgorithm;
pub use registry::PhoneticKind;

/// Approximate how text is pronounced before encoding it: lower-cased, a
/// literal `+` read as "plus", digits dropped.
pub fn spoken_form(text: &str) -> String {
    let mut spoken = String::with_capacity(text.len());
    for ch in text.to_lowercase().chars() {
        match ch {
            '+' => spoken.push_str(" plus"),
            '0'..='9' => spoken.push(' '),
            _ => spoken.push(ch),
        }
    }
    spoken.trim().to_string()
}
