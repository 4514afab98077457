//! Spoken-French normalization shared by the French encoders.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Split text into lower-case, accent-free words the way they would be
/// pronounced: symbols and digits are spelled out and short vowel-less
/// tokens (acronyms) are spelled letter by letter.
pub(crate) fn spoken_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in text.chars().flat_map(char::to_lowercase) {
        if let Some(folded) = fold_letter(ch) {
            current.push_str(folded);
            continue;
        }
        if is_combining_mark(ch) {
            continue;
        }

        flush(&mut current, &mut words);
        if let Some(spelled) = spell_symbol(ch) {
            words.push(spelled.to_string());
        }
    }
    flush(&mut current, &mut words);

    words
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let word = std::mem::take(current);
    words.push(spell_acronym(&word).unwrap_or(word));
}

/// Map a lower-case letter to its unaccented form. `None` for non-letters.
fn fold_letter(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'a' => "a",
        'b' => "b",
        'c' => "c",
        'd' => "d",
        'e' => "e",
        'f' => "f",
        'g' => "g",
        'h' => "h",
        'i' => "i",
        'j' => "j",
        'k' => "k",
        'l' => "l",
        'm' => "m",
        'n' => "n",
        'o' => "o",
        'p' => "p",
        'q' => "q",
        'r' => "r",
        's' => "s",
        't' => "t",
        'u' => "u",
        'v' => "v",
        'w' => "w",
        'x' => "x",
        'y' => "y",
        'z' => "z",

        'é' | 'è' | 'ê' | 'ë' => "e",
        'à' | 'â' | 'ä' | 'á' | 'ã' | 'å' => "a",
        'î' | 'ï' | 'í' | 'ì' => "i",
        'ô' | 'ö' | 'ó' | 'ò' | 'õ' | 'ø' => "o",
        'û' | 'ù' | 'ü' | 'ú' => "u",
        'ÿ' | 'ý' => "y",
        'ç' => "s",
        'ñ' => "n",
        'œ' => "oe",
        'æ' => "ae",
        'ß' => "ss",
        _ => return None,
    };
    Some(folded)
}

fn spell_symbol(ch: char) -> Option<&'static str> {
    let spelled = match ch {
        '+' => "plus",
        '&' => "et",
        '@' => "arobase",
        '%' => "pourcent",
        '0' => "zero",
        '1' => "un",
        '2' => "deux",
        '3' => "trois",
        '4' => "quatre",
        '5' => "cinq",
        '6' => "six",
        '7' => "sept",
        '8' => "huit",
        '9' => "neuf",
        _ => return None,
    };
    Some(spelled)
}

/// Spell a 2-5 letter token without vowels using French letter names.
fn spell_acronym(word: &str) -> Option<String> {
    let len = word.chars().count();
    if !(2..=5).contains(&len) || word.chars().any(|c| VOWELS.contains(&c)) {
        return None;
    }
    word.chars().map(letter_name).collect()
}

fn letter_name(ch: char) -> Option<&'static str> {
    let name = match ch {
        'a' => "a",
        'b' => "be",
        'c' => "ce",
        'd' => "de",
        'e' => "e",
        'f' => "effe",
        'g' => "je",
        'h' => "ache",
        'i' => "i",
        'j' => "ji",
        'k' => "ka",
        'l' => "elle",
        'm' => "emme",
        'n' => "enne",
        'o' => "o",
        'p' => "pe",
        'q' => "ku",
        'r' => "erre",
        's' => "esse",
        't' => "te",
        'u' => "u",
        'v' => "ve",
        'w' => "doubleve",
        'x' => "ixe",
        'y' => "igrec",
        'z' => "zede",
        _ => return None,
    };
    Some(name)
}

fn is_combining_mark(ch: char) -> bool {
    matches!(ch, '\u{0300}'..='\u{036F}')
}
