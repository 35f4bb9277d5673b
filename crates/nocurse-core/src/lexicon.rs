//! The set of words and phrases treated as obscene.

use std::collections::HashMap;

use crate::text::normalize;
use crate::word_lists::FALLBACK_BAD_WORDS;

/// A deduplicated set of lowercase words and multi-word phrases.
///
/// Members are lowercased and trimmed on the way in; empty strings are
/// dropped. Single tokens and phrases share the set, and consumers tell them
/// apart with [`crate::text::is_phrase`].
///
/// Each member's normalized spelling is computed once on insert, together
/// with an index from normalized spelling back to a member.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Member to its normalized spelling.
    words: HashMap<String, String>,
    /// Normalized spelling to the first member inserted with it.
    by_normal: HashMap<String, String>,
}

impl Lexicon {
    /// The hardcoded base lexicon.
    pub fn fallback() -> Self {
        FALLBACK_BAD_WORDS.iter().copied().map(str::to_string).collect()
    }

    /// Whether `word` is a member, by exact string equality.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// A member whose normalized spelling is `normal`, if any.
    pub fn entry_for_normalized(&self, normal: &str) -> Option<&str> {
        self.by_normal.get(normal).map(String::as_str)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon has no members.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over members in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    /// Iterate over `(member, normalized spelling)` pairs.
    pub fn iter_normalized(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words.iter().map(|(w, n)| (w.as_str(), n.as_str()))
    }

    /// Add words, returning how many were not already present.
    pub fn extend<I>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.words.len();
        for word in words {
            self.insert(word);
        }
        self.words.len() - before
    }

    /// Members sorted alphabetically, for stable output.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }

    fn insert(&mut self, word: String) {
        let cleaned = word.trim().to_lowercase();
        if cleaned.is_empty() || self.words.contains_key(&cleaned) {
            return;
        }
        let normal = normalize(&cleaned);
        self.by_normal
            .entry(normal.clone())
            .or_insert_with(|| cleaned.clone());
        self.words.insert(cleaned, normal);
    }
}

// Members alone decide equality; which member the index points at depends
// on insertion order.
impl PartialEq for Lexicon {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Lexicon {}

impl FromIterator<String> for Lexicon {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut lexicon = Self::default();
        lexicon.extend(iter);
        lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_not_empty() {
        let lexicon = Lexicon::fallback();
        assert!(!lexicon.is_empty());
        assert!(lexicon.contains("хуй"));
        assert_eq!(lexicon.len(), FALLBACK_BAD_WORDS.len());
    }

    #[test]
    fn members_are_lowercased_and_trimmed() {
        let lexicon: Lexicon = ["  ХУЙ ", "Сука", "", "   "]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(lexicon.sorted(), vec!["сука", "хуй"]);
    }

    #[test]
    fn extend_reports_new_members_only() {
        let mut lexicon = Lexicon::fallback();
        let added = lexicon.extend(["хуй".to_string(), "тест".to_string(), "тест".to_string()]);
        assert_eq!(added, 1);
        assert!(lexicon.contains("тест"));
    }

    #[test]
    fn normalized_spelling_is_indexed() {
        let lexicon: Lexicon = ["ёбаный", "хуй"].into_iter().map(String::from).collect();
        assert_eq!(lexicon.entry_for_normalized("ебаный"), Some("ёбаный"));
        assert_eq!(lexicon.entry_for_normalized("хуй"), Some("хуй"));
        assert_eq!(lexicon.entry_for_normalized("ёбаный"), None);

        let pairs: Vec<(&str, &str)> = lexicon
            .iter_normalized()
            .filter(|(w, _)| *w == "ёбаный")
            .collect();
        assert_eq!(pairs, vec![("ёбаный", "ебаный")]);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: Lexicon = ["ебать", "ёбать"].into_iter().map(String::from).collect();
        let b: Lexicon = ["ёбать", "ебать"].into_iter().map(String::from).collect();
        assert_eq!(a, b);
    }
}
