//! Curated word lists for profanity detection.
//!
//! The fallback lexicon, the inflection ending tables used to over-generate
//! word forms, the curated form lists for well-known roots, and the short
//! list of roots swept for inside every long token.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Base words that are always part of the lexicon, and its entire content
/// when the remote source is unreachable.
pub static FALLBACK_BAD_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "бля", "блять", "ебать", "хуй", "пизда", "сука", "пидор", "пидр", "мудак", "долбоёб",
        "еблан", "дебил", "хер", "хрен", "залупа", "манда", "шлюха", "ебало", "жопа", "пиздец",
        "ебаный", "нахуй", "нахер", "похуй",
    ]
    .into_iter()
    .collect()
});

/// Infinitive ending that marks a verb-like word.
pub const VERB_SUFFIX: &str = "ть";

/// Endings appended to a verb stem (the infinitive without [`VERB_SUFFIX`]).
pub const VERB_ENDINGS: &[&str] = &[
    "ть", "л", "ла", "ло", "ли", "ю", "ешь", "ет", "ем", "ете", "ют", "й", "йте", "вший",
    "вшая", "вшие", "ться", "лся", "лась", "лись", "нный", "нная", "нные", "я",
];

/// Ending that marks a feminine-noun-like word.
pub const NOUN_SUFFIX: char = 'а';

/// Case endings appended to a feminine noun stem.
pub const NOUN_ENDINGS: &[&str] = &[
    "а", "ы", "и", "е", "у", "ой", "ою", "ам", "ами", "ах", "ище", "ища", "ищи",
];

/// Ending that marks an adjective-like word.
pub const ADJECTIVE_SUFFIX: char = 'й';

/// Vowels that may precede [`ADJECTIVE_SUFFIX`] in an adjective ending.
pub const ADJECTIVE_VOWELS: &[char] = &['ы', 'и', 'о'];

/// Endings appended to an adjective stem (the word without its two-letter ending).
pub const ADJECTIVE_ENDINGS: &[&str] = &[
    "ый", "ий", "ой", "ая", "яя", "ое", "ее", "ые", "ие", "ого", "его", "ому", "ему", "ым",
    "им", "ом", "ем", "ую", "юю", "ых", "их", "ыми", "ими",
];

/// Known obscene roots and hand-written forms registered for each.
///
/// When a word contains the root, every listed form joins its variant group as is.
pub const ROOT_FORMS: &[(&str, &[&str])] = &[
    (
        "хуй",
        &[
            "хуя", "хую", "хуем", "хуе", "хуи", "хуёв", "хуев", "хуям", "хуями", "хуях", "хуйня",
            "хуйни", "хуйню", "хуйнёй", "хуёвый", "хуевый", "хуёво", "хуево",
        ],
    ),
    (
        "пизд",
        &[
            "пизда", "пизды", "пизде", "пизду", "пиздой", "пизд", "пиздам", "пиздами", "пиздах",
            "пиздец", "пиздеца", "пиздецу", "пиздецом", "пиздёж", "пиздеж", "пиздеть", "пиздит",
            "пиздят", "пиздатый", "пиздато",
        ],
    ),
    (
        "бля",
        &[
            "блядь", "бляди", "блядей", "блядям", "блядина", "блядский", "блядство", "блять",
            "бля",
        ],
    ),
    (
        "еба",
        &[
            "ебать", "ебал", "ебала", "ебали", "ебало", "ебанный", "ебаный", "ебаная", "ебаное",
            "ебаные", "ебанутый", "ебанутая", "ебануться", "ебашить", "ебёт", "ебет", "ебут",
            "ебу",
        ],
    ),
    (
        "ёб",
        &[
            "ёб", "ёбаный", "ёбанный", "ёбнуть", "ёбнутый", "ёбарь", "ёбт", "ёпт", "ёбаная",
        ],
    ),
    (
        "муда",
        &["мудак", "мудака", "мудаку", "мудаком", "мудаки", "мудаков", "мудачьё", "мудачок"],
    ),
    (
        "залуп",
        &["залупа", "залупы", "залупе", "залупу", "залупой", "залупиться", "залупился"],
    ),
    (
        "пидор",
        &["пидор", "пидора", "пидору", "пидором", "пидоры", "пидоров", "пидорас", "пидарас"],
    ),
];

/// Highest-confidence roots looked for inside every token of four or more letters.
pub const HARD_ROOTS: &[&str] = &[
    "хуй", "хуё", "пизд", "бляд", "блят", "залуп", "мудак", "мудил", "ёбан", "ёбну",
    "долбоеб", "долбоёб", "пидор", "пидар", "уебок", "уёбок", "уебан",
];
