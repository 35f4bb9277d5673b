//! Orthographic and morphological variant generation.
//!
//! Russian text writes `ё` as `е` more often than not, and obscene words are
//! used in every inflected form. A lexicon built from dictionary headwords
//! therefore needs each headword expanded into the spellings and endings that
//! actually show up in messages.
//!
//! Generation over-produces on purpose: some generated forms are real,
//! harmless words that share a stem. The matcher's minimum lengths keep the
//! damage from those forms small.

use std::collections::HashSet;

use crate::text::{BASE_LETTER, MARKED_LETTER, has_letter_pair, normalize};
use crate::word_lists::{
    ADJECTIVE_ENDINGS, ADJECTIVE_SUFFIX, ADJECTIVE_VOWELS, NOUN_ENDINGS, NOUN_SUFFIX, ROOT_FORMS,
    VERB_ENDINGS, VERB_SUFFIX,
};

/// Words with more substitutable positions than this only get their
/// normalized spelling instead of every combination.
pub const MAX_VARIANT_POSITIONS: usize = 12;

/// Minimum length (in characters) a word needs before ending rules apply.
const MIN_INFLECTABLE_LEN: usize = 4;

/// Every spelling of `word` that differs only in `е`/`ё` choice.
///
/// A word without either letter comes back alone. Otherwise the result holds
/// the word, its fully normalized spelling, and each way of marking a
/// non-empty subset of the normalized spelling's `е` positions.
///
/// With `n` counting `е` positions after every `ё` has been replaced by `е`,
/// the result has exactly `2^n` spellings for `n` up to
/// [`MAX_VARIANT_POSITIONS`]. `ёбнее` has `n = 3` and yields 8, not 4. The
/// result is closed: any member expands to the same set.
pub fn letter_variants(word: &str) -> HashSet<String> {
    let mut variants = HashSet::from([word.to_string()]);
    if !has_letter_pair(word) {
        return variants;
    }

    let base = normalize(word);
    let chars: Vec<char> = base.chars().collect();
    let positions: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == BASE_LETTER)
        .map(|(i, _)| i)
        .collect();
    variants.insert(base);

    if positions.len() > MAX_VARIANT_POSITIONS {
        tracing::debug!(word, positions = positions.len(), "too many positions to enumerate");
        return variants;
    }

    for mask in 1u32..(1u32 << positions.len()) {
        let mut spelled = chars.clone();
        for (bit, &pos) in positions.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                spelled[pos] = MARKED_LETTER;
            }
        }
        variants.insert(spelled.into_iter().collect());
    }

    variants
}

/// Letter variants plus inflected forms of `word`.
///
/// Verb-like words (ending in `ть`) get conjugation endings, feminine-noun-like
/// words (ending in `а`) get case endings, and adjective-like words (ending in
/// `ый`, `ий`, `ой`) get adjective endings. Each generated form is expanded
/// through [`letter_variants`]. Words containing a known root also receive
/// that root's curated forms verbatim.
pub fn morphological_forms(word: &str) -> HashSet<String> {
    let mut forms = letter_variants(word);

    for candidate in inflected_candidates(word) {
        forms.extend(letter_variants(&candidate));
    }

    for (root, root_forms) in ROOT_FORMS {
        if word.contains(root) {
            forms.extend(root_forms.iter().map(|f| (*f).to_string()));
        }
    }

    forms
}

/// Candidate forms from the ending tables, without letter expansion.
fn inflected_candidates(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < MIN_INFLECTABLE_LEN {
        return Vec::new();
    }

    let (stem, endings): (String, &[&str]) = if let Some(stem) = word.strip_suffix(VERB_SUFFIX) {
        (stem.to_string(), VERB_ENDINGS)
    } else if chars.last() == Some(&NOUN_SUFFIX) {
        (chars[..chars.len() - 1].iter().collect(), NOUN_ENDINGS)
    } else if chars.last() == Some(&ADJECTIVE_SUFFIX)
        && ADJECTIVE_VOWELS.contains(&chars[chars.len() - 2])
    {
        (chars[..chars.len() - 2].iter().collect(), ADJECTIVE_ENDINGS)
    } else {
        return Vec::new();
    };

    endings.iter().map(|ending| format!("{stem}{ending}")).collect()
}
