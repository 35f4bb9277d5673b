//! The live lexicon and its lifecycle.
//!
//! [`LexiconStore`] owns the current [`Lexicon`]. It starts out holding the
//! fallback words so detection works before initialization finishes, and is
//! then filled from the cache or, failing that, from a fresh build.
//!
//! Readers take an `Arc` snapshot under a short read lock. Mutations are
//! serialized by an async mutex and publish a complete new lexicon in one
//! swap, so a reader sees either the old set or the new one.

use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::Mutex;

use crate::builder::LexiconBuilder;
use crate::cache::LexiconCache;
use crate::config::Config;
use crate::error::FetchResult;
use crate::lexicon::Lexicon;
use crate::matcher::{self, Verdict};
use crate::source::WiktionarySource;
use crate::variants::letter_variants;

/// Process-wide holder of the current lexicon.
#[derive(Debug)]
pub struct LexiconStore {
    current: RwLock<Arc<Lexicon>>,
    cache: LexiconCache,
    builder: LexiconBuilder,
    update: Mutex<()>,
}

impl LexiconStore {
    /// A store holding the fallback lexicon until [`Self::initialize`] runs.
    pub fn new(cache: LexiconCache, builder: LexiconBuilder) -> Self {
        Self {
            current: RwLock::new(Arc::new(Lexicon::fallback())),
            cache,
            builder,
            update: Mutex::new(()),
        }
    }

    /// A store wired to the configured cache file and Wiktionary source.
    pub fn from_config(config: &Config) -> FetchResult<Self> {
        let source = WiktionarySource::new(config.source.clone())?;
        Ok(Self::new(
            LexiconCache::new(config.resolved_cache_path()),
            LexiconBuilder::new(Arc::new(source)),
        ))
    }

    /// The cache this store persists to.
    pub const fn cache(&self) -> &LexiconCache {
        &self.cache
    }

    /// The lexicon as of now. Later mutations do not affect the returned value.
    pub fn snapshot(&self) -> Arc<Lexicon> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    /// Load the lexicon from the cache, or build and cache it.
    ///
    /// A readable, non-empty cache is adopted as is and the source is not
    /// contacted. Returns the size of the adopted lexicon.
    #[tracing::instrument(skip(self))]
    pub async fn initialize(&self) -> usize {
        let _guard = self.update.lock().await;
        self.cache.ensure_dir();

        if let Some(cached) = self.cache.load() {
            if cached.is_empty() {
                tracing::warn!("cache holds no words, rebuilding");
            } else {
                return self.publish(cached);
            }
        }

        let built = self.builder.build().await;
        self.cache.save(&built);
        self.publish(built)
    }

    /// Rebuild from the source regardless of the cache, then rewrite the cache.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self) -> usize {
        let _guard = self.update.lock().await;
        self.cache.ensure_dir();

        let built = self.builder.build().await;
        self.cache.save(&built);
        self.publish(built)
    }

    /// Add a word and its letter variants, then persist the whole lexicon.
    ///
    /// The word is trimmed and lowercased first. Returns how many entries
    /// were new; blank input adds nothing.
    #[tracing::instrument(skip(self))]
    pub async fn add_word(&self, word: &str) -> usize {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return 0;
        }

        let _guard = self.update.lock().await;
        let mut next = Lexicon::clone(&self.snapshot());
        let added = next.extend(letter_variants(&word));
        self.cache.save(&next);
        self.publish(next);
        tracing::info!(word, added, "word added");
        added
    }

    /// Run the matcher against the current lexicon.
    pub fn detect<'a>(&self, text: impl Into<Option<&'a str>>) -> Verdict {
        matcher::detect(&self.snapshot(), text)
    }

    fn publish(&self, lexicon: Lexicon) -> usize {
        let size = lexicon.len();
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::new(lexicon);
        tracing::info!(words = size, "lexicon replaced");
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    use crate::source::GlossarySource;

    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
        titles: Vec<&'static str>,
    }

    #[async_trait]
    impl GlossarySource for CountingSource {
        async fn fetch_category_words(&self) -> HashSet<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.titles.iter().map(|t| (*t).to_string()).collect()
        }
    }

    fn store_with(tmp: &TempDir, source: Arc<CountingSource>) -> LexiconStore {
        let path = Utf8PathBuf::try_from(tmp.path().join("cache/words.json")).unwrap();
        LexiconStore::new(LexiconCache::new(path), LexiconBuilder::new(source))
    }

    #[test]
    fn starts_with_fallback() {
        let tmp = TempDir::new().unwrap();
        let store = store_with(&tmp, Arc::default());
        assert_eq!(*store.snapshot(), Lexicon::fallback());
        assert!(store.detect("ну ты и мудак").is_profane);
    }

    #[tokio::test]
    async fn initialize_builds_and_caches_without_cache() {
        let tmp = TempDir::new().unwrap();
        let source = Arc::new(CountingSource {
            titles: vec!["шалава"],
            ..CountingSource::default()
        });
        let store = store_with(&tmp, Arc::clone(&source));

        let size = store.initialize().await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(size, store.snapshot().len());
        let cached = store.cache().load().expect("cache written");
        assert!(cached.contains("шалавы"));
        assert_eq!(cached, *store.snapshot());
    }

    #[tokio::test]
    async fn initialize_with_cache_skips_source() {
        let tmp = TempDir::new().unwrap();
        let source = Arc::new(CountingSource::default());
        let store = store_with(&tmp, Arc::clone(&source));
        let cached: Lexicon = ["только", "это"].into_iter().map(String::from).collect();
        store.cache().save(&cached);

        let size = store.initialize().await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
        assert_eq!(size, 2);
        assert_eq!(*store.snapshot(), cached);
    }

    #[tokio::test]
    async fn initialize_with_empty_cache_rebuilds() {
        let tmp = TempDir::new().unwrap();
        let source = Arc::new(CountingSource::default());
        let store = store_with(&tmp, Arc::clone(&source));
        store.cache().save(&Lexicon::default());

        store.initialize().await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(*store.snapshot(), Lexicon::fallback());
    }

    #[tokio::test]
    async fn refresh_ignores_cache() {
        let tmp = TempDir::new().unwrap();
        let source = Arc::new(CountingSource {
            titles: vec!["манда"],
            ..CountingSource::default()
        });
        let store = store_with(&tmp, Arc::clone(&source));
        store.cache().save(&Lexicon::fallback());

        store.initialize().await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);

        store.refresh().await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(store.snapshot().contains("мандой"));
        assert!(store.cache().load().unwrap().contains("мандой"));
    }

    #[tokio::test]
    async fn add_word_adds_letter_variants_and_persists() {
        let tmp = TempDir::new().unwrap();
        let store = store_with(&tmp, Arc::default());
        let before = store.snapshot().len();

        let added = store.add_word("  Тест ").await;

        assert_eq!(added, letter_variants("тест").len());
        assert_eq!(store.snapshot().len(), before + added);
        let cached = store.cache().load().unwrap();
        assert!(cached.contains("тест"));
        assert!(cached.contains("тёст"));
    }

    #[tokio::test]
    async fn add_existing_or_blank_word_adds_nothing() {
        let tmp = TempDir::new().unwrap();
        let store = store_with(&tmp, Arc::default());

        assert_eq!(store.add_word("хуй").await, 0);
        assert_eq!(store.add_word("   ").await, 0);
    }

    #[tokio::test]
    async fn snapshot_is_stable_across_mutation() {
        let tmp = TempDir::new().unwrap();
        let store = store_with(&tmp, Arc::default());
        let before = store.snapshot();

        store.add_word("новое").await;

        assert!(!before.contains("новое"));
        assert!(store.snapshot().contains("новое"));
    }

    #[tokio::test]
    async fn unwritable_cache_does_not_block_initialize() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("cache"), "").unwrap();
        let source = Arc::new(CountingSource {
            titles: vec!["шлюха"],
            ..CountingSource::default()
        });
        let store = store_with(&tmp, source);

        let size = store.initialize().await;

        assert!(size > Lexicon::fallback().len());
        assert!(store.detect("шлюхи").is_profane);
    }
}
