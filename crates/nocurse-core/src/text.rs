//! Text processing utilities.
//!
//! Letter normalization, word tokenization, and punctuation stripping shared
//! by the variant generator, the lexicon builder, and the matcher.

use regex::Regex;
use std::sync::LazyLock;

/// The letter that is written in place of its marked sibling in most texts.
pub const BASE_LETTER: char = 'е';

/// The diacritic-marked sibling of [`BASE_LETTER`].
pub const MARKED_LETTER: char = 'ё';

/// A run of word characters. `\w` is Unicode-aware, so Cyrillic letters count.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Anything that is neither a word character nor whitespace.
static PUNCTUATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// Replace every marked letter with its base form (`ё` → `е`, `Ё` → `Е`).
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            MARKED_LETTER => BASE_LETTER,
            'Ё' => 'Е',
            other => other,
        })
        .collect()
}

/// Whether `text` contains either letter of the interchangeable pair.
pub fn has_letter_pair(text: &str) -> bool {
    text.contains([BASE_LETTER, MARKED_LETTER])
}

/// Split text into word tokens at word boundaries.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Remove punctuation, keeping word characters and whitespace.
pub fn strip_punctuation(text: &str) -> String {
    PUNCTUATION_PATTERN.replace_all(text, "").into_owned()
}

/// Length in characters rather than bytes.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Whether the entry is a multi-token phrase.
pub fn is_phrase(entry: &str) -> bool {
    entry.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_replaces_marked_letter() {
        assert_eq!(normalize("ёлка"), "елка");
        assert_eq!(normalize("Ёж и ёж"), "Еж и еж");
        assert_eq!(normalize("привет"), "привет");
    }

    #[test]
    fn tokenize_handles_cyrillic_and_punctuation() {
        let tokens = tokenize("Привет, мир! Как дела?");
        assert_eq!(tokens, vec!["Привет", "мир", "Как", "дела"]);
    }

    #[test]
    fn tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ,.!").is_empty());
    }

    #[test]
    fn strip_punctuation_keeps_spaces() {
        assert_eq!(strip_punctuation("ёб твою мать!"), "ёб твою мать");
        assert_eq!(strip_punctuation("ни хуя-себе"), "ни хуясебе");
    }

    #[test]
    fn char_len_counts_characters() {
        assert_eq!(char_len("хуй"), 3);
        assert_eq!("хуй".len(), 6);
    }

    #[test]
    fn phrase_detection() {
        assert!(is_phrase("дать пизды"));
        assert!(!is_phrase("пизда"));
    }

    #[test]
    fn letter_pair_detection() {
        assert!(has_letter_pair("ебать"));
        assert!(has_letter_pair("ёб"));
        assert!(!has_letter_pair("хуй"));
    }
}
