//! Core library for nocurse.
//!
//! Detects obscene Russian words and phrases in short messages, including
//! spellings that swap `е` and `ё` and inflected forms missing from the
//! base glossary.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//! - [`text`] - Normalization and tokenization helpers
//! - [`word_lists`] - Fallback words, ending tables, and curated roots
//! - [`variants`] - Letter variants and morphological forms of a word
//! - [`lexicon`] - The word set
//! - [`source`] - Fetching glossary titles from Wiktionary
//! - [`builder`] - Expanding fetched titles into a full lexicon
//! - [`cache`] - On-disk lexicon snapshot
//! - [`store`] - The live lexicon and its lifecycle
//! - [`matcher`] - The detection algorithm
//!
//! # Quick Start
//!
//! ```no_run
//! use nocurse_core::{ConfigLoader, LexiconStore};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let (config, _sources) = ConfigLoader::new().with_user_config(true).load()?;
//! let store = LexiconStore::from_config(&config)?;
//! store.initialize().await;
//!
//! let verdict = store.detect("какой-то текст");
//! println!("{:?}", verdict.reason_text());
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod builder;
pub mod cache;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod matcher;
pub mod source;
pub mod store;
pub mod text;
pub mod variants;
pub mod word_lists;

pub use builder::LexiconBuilder;
pub use cache::LexiconCache;
pub use config::{Config, ConfigLoader, LogLevel, SourceConfig};
pub use error::{CacheError, ConfigError, ConfigResult, FetchError, FetchResult};
pub use lexicon::Lexicon;
pub use matcher::{MatchReason, Verdict, detect};
pub use source::{GlossarySource, WiktionarySource};
pub use store::LexiconStore;
pub use variants::{letter_variants, morphological_forms};
