//! Assembly of the full lexicon from the glossary source.

use std::collections::HashSet;
use std::sync::Arc;

use crate::lexicon::Lexicon;
use crate::source::GlossarySource;
use crate::text::strip_punctuation;
use crate::variants::{letter_variants, morphological_forms};
use crate::word_lists::FALLBACK_BAD_WORDS;

/// Builds a [`Lexicon`] from a [`GlossarySource`] and the fallback words.
#[derive(Clone)]
pub struct LexiconBuilder {
    source: Arc<dyn GlossarySource>,
}

impl std::fmt::Debug for LexiconBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexiconBuilder").finish_non_exhaustive()
    }
}

impl LexiconBuilder {
    /// A builder drawing titles from `source`.
    pub fn new(source: Arc<dyn GlossarySource>) -> Self {
        Self { source }
    }

    /// Fetch category titles and expand them into a lexicon.
    ///
    /// Never fails: an unreachable source yields the fallback lexicon.
    #[tracing::instrument(skip(self))]
    pub async fn build(&self) -> Lexicon {
        let titles = self.source.fetch_category_words().await;
        let lexicon = expand_titles(titles);
        tracing::info!(words = lexicon.len(), "lexicon built");
        lexicon
    }
}

/// Expand raw titles into the lexicon.
///
/// Each title contributes itself and its punctuation-free spelling, both
/// with letter variants. Every word gathered that way is then expanded with
/// [`morphological_forms`]. The fallback words are merged in last; when no
/// title produced anything, they are the whole result.
pub fn expand_titles<I>(titles: I) -> Lexicon
where
    I: IntoIterator<Item = String>,
{
    let mut words = HashSet::new();
    for title in titles {
        let word = title.trim().to_lowercase();
        if word.is_empty() {
            continue;
        }
        let stripped = strip_punctuation(&word)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if !stripped.is_empty() && stripped != word {
            words.extend(letter_variants(&stripped));
        }
        words.extend(letter_variants(&word));
    }

    if words.is_empty() {
        tracing::warn!("glossary source returned nothing, using fallback words");
        return Lexicon::fallback();
    }

    let forms: HashSet<String> = words.iter().flat_map(|w| morphological_forms(w)).collect();
    words.extend(forms);

    let mut lexicon: Lexicon = words.into_iter().collect();
    lexicon.extend(FALLBACK_BAD_WORDS.iter().map(|w| (*w).to_string()));
    lexicon
}
