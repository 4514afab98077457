use crate::phonetic::french::spoken_words;
use crate::phonetic::PhoneticAlgorithm;

/// Dense French encoder: each word reduced to its consonant classes.
///
/// Vowels and `h` vanish, a word starting with a vowel sound gets a leading
/// `A` marker, and repeated classes collapse inside a word. Words are
/// concatenated so a phrase split differently by the transcriber
/// ("next jen" vs "nextgen") still yields the same key.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchSkeleton;

impl FrenchSkeleton {
    pub fn new() -> Self {
        Self
    }
}

impl PhoneticAlgorithm for FrenchSkeleton {
    fn encode(&self, text: &str) -> String {
        spoken_words(text)
            .iter()
            .map(|word| skeleton(word))
            .collect()
    }

    fn name(&self) -> &'static str {
        "FrenchSkeleton"
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn is_front_vowel(c: Option<&char>) -> bool {
    matches!(c, Some('e' | 'i' | 'y'))
}

fn skeleton(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut code = String::new();

    let first_sound = chars.iter().find(|&&c| c != 'h');
    if first_sound.is_some_and(|&c| is_vowel(c)) {
        code.push('A');
    }

    let mut i = 0;
    while i < chars.len() {
        let next = chars.get(i + 1);
        let (classes, width) = match chars[i] {
            'c' if next == Some(&'h') => ("X", 2),
            'c' if is_front_vowel(next) => ("S", 1),
            'c' => ("K", 1),
            's' if next == Some(&'h') => ("X", 2),
            's' | 'z' => ("S", 1),
            'p' if next == Some(&'h') => ("F", 2),
            'p' | 'b' => ("P", 1),
            'g' if next == Some(&'n') => ("N", 2),
            'g' if is_front_vowel(next) => ("X", 1),
            'g' | 'k' | 'q' => ("K", 1),
            'x' => ("KS", 1),
            'd' | 't' => ("T", 1),
            'j' => ("X", 1),
            'f' | 'v' | 'w' => ("F", 1),
            'l' => ("L", 1),
            'm' | 'n' => ("N", 1),
            'r' => ("R", 1),
            _ => ("", 1),
        };

        for class in classes.chars() {
            if !code.ends_with(class) {
                code.push(class);
            }
        }
        i += width;
    }

    code
}
