//! Profanity detection against a lexicon.
//!
//! [`detect`] runs five checks in order and stops at the first hit:
//!
//! 1. a token is a lexicon member;
//! 2. a token equals a lexicon member once both are normalized;
//! 3. a multi-word entry occurs in the text;
//! 4. a single-word entry occurs inside one of the text's tokens;
//! 5. a token of four or more letters contains one of the hard roots.
//!
//! The order only decides which [`MatchReason`] is reported. Short entries
//! are skipped by the containment checks since they match inside too many
//! ordinary words.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::lexicon::Lexicon;
use crate::text::{char_len, is_phrase, normalize, tokenize};
use crate::word_lists::HARD_ROOTS;

/// Entries must be longer than this (in characters) to take part in the
/// phrase and root containment checks.
pub const MIN_ENTRY_LEN: usize = 3;

/// Tokens shorter than this are not searched for hard roots.
pub const MIN_SWEEP_TOKEN_LEN: usize = 4;

/// Which check fired and on what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum MatchReason {
    /// A token is itself a lexicon member.
    ExactWord {
        /// The matching token.
        token: String,
    },
    /// A token matches an entry after letter normalization.
    NormalizedMatch {
        /// The token as written in the text.
        token: String,
        /// The lexicon entry it matched.
        entry: String,
    },
    /// A multi-word entry occurs in the text.
    Phrase {
        /// The phrase found.
        entry: String,
    },
    /// A single-word entry occurs inside a token.
    Root {
        /// The token containing the entry.
        token: String,
        /// The lexicon entry found inside it.
        entry: String,
    },
    /// A hard root occurs inside a token.
    RootInToken {
        /// The token containing the root.
        token: String,
        /// The root found.
        root: String,
    },
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactWord { token } => write!(f, "exact word: {token}"),
            Self::NormalizedMatch { token, entry } => {
                write!(f, "normalized match: {token} -> {entry}")
            }
            Self::Phrase { entry } => write!(f, "phrase: {entry}"),
            Self::Root { token, entry } => write!(f, "root: {token} contains {entry}"),
            Self::RootInToken { token, root } => write!(f, "root in token: {token} ({root})"),
        }
    }
}

/// Outcome of one detection call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Whether any check matched.
    pub is_profane: bool,
    /// What matched; absent for clean text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<MatchReason>,
}

impl Verdict {
    /// No match.
    pub const fn clean() -> Self {
        Self {
            is_profane: false,
            reason: None,
        }
    }

    /// A match for the given reason.
    pub const fn profane(reason: MatchReason) -> Self {
        Self {
            is_profane: true,
            reason: Some(reason),
        }
    }

    /// The reason as display text, if any.
    pub fn reason_text(&self) -> Option<String> {
        self.reason.as_ref().map(ToString::to_string)
    }
}

/// The text under test in its derived forms.
struct Subject {
    lower: String,
    normalized: String,
    /// Tokens of `lower` followed by new tokens of `normalized`, without repeats.
    tokens: Vec<String>,
}

impl Subject {
    fn new(text: &str) -> Self {
        let lower = text.to_lowercase();
        let normalized = normalize(&lower);

        let mut seen = HashSet::new();
        let tokens = tokenize(&lower)
            .into_iter()
            .chain(tokenize(&normalized))
            .filter(|token| seen.insert(token.clone()))
            .collect();

        Self {
            lower,
            normalized,
            tokens,
        }
    }

    fn contains(&self, needle: &str) -> bool {
        self.lower.contains(needle) || self.normalized.contains(needle)
    }

    fn token_containing(&self, needle: &str) -> Option<&str> {
        self.tokens
            .iter()
            .find(|token| token.contains(needle))
            .map(String::as_str)
    }
}

/// Decide whether `text` contains obscene language according to `lexicon`.
///
/// Absent or empty text is clean.
pub fn detect<'a>(lexicon: &Lexicon, text: impl Into<Option<&'a str>>) -> Verdict {
    let Some(text) = text.into().filter(|t| !t.is_empty()) else {
        return Verdict::clean();
    };
    let subject = Subject::new(text);

    let reason = exact_word(lexicon, &subject)
        .or_else(|| normalized_match(lexicon, &subject))
        .or_else(|| phrase(lexicon, &subject))
        .or_else(|| root(lexicon, &subject))
        .or_else(|| root_in_token(&subject));

    match reason {
        Some(reason) => {
            tracing::debug!(%reason, "profanity detected");
            Verdict::profane(reason)
        }
        None => Verdict::clean(),
    }
}

fn exact_word(lexicon: &Lexicon, subject: &Subject) -> Option<MatchReason> {
    subject
        .tokens
        .iter()
        .find(|token| lexicon.contains(token))
        .map(|token| MatchReason::ExactWord {
            token: token.clone(),
        })
}

fn normalized_match(lexicon: &Lexicon, subject: &Subject) -> Option<MatchReason> {
    subject.tokens.iter().find_map(|token| {
        lexicon
            .entry_for_normalized(&normalize(token))
            .map(|entry| MatchReason::NormalizedMatch {
                token: token.clone(),
                entry: entry.to_string(),
            })
    })
}

fn phrase(lexicon: &Lexicon, subject: &Subject) -> Option<MatchReason> {
    lexicon
        .iter_normalized()
        .filter(|(entry, _)| is_phrase(entry) && char_len(entry) > MIN_ENTRY_LEN)
        .find(|(entry, normal)| subject.contains(entry) || subject.contains(normal))
        .map(|(entry, _)| MatchReason::Phrase {
            entry: entry.to_string(),
        })
}

fn root(lexicon: &Lexicon, subject: &Subject) -> Option<MatchReason> {
    lexicon
        .iter_normalized()
        .filter(|(entry, _)| !is_phrase(entry) && char_len(entry) > MIN_ENTRY_LEN)
        .find_map(|(entry, normal)| {
            [entry, normal]
                .into_iter()
                .filter(|form| subject.contains(form))
                .find_map(|form| subject.token_containing(form))
                .map(|token| MatchReason::Root {
                    token: token.to_string(),
                    entry: entry.to_string(),
                })
        })
}

fn root_in_token(subject: &Subject) -> Option<MatchReason> {
    subject
        .tokens
        .iter()
        .filter(|token| char_len(token) >= MIN_SWEEP_TOKEN_LEN)
        .find_map(|token| {
            HARD_ROOTS
                .iter()
                .find(|root| token.contains(*root))
                .map(|root| MatchReason::RootInToken {
                    token: token.clone(),
                    root: (*root).to_string(),
                })
        })
}
