//! Error types for nocurse-core.
//!
//! None of the lexicon errors reach callers of [`crate::LexiconStore`]: they
//! are logged where they happen and the affected source contributes nothing.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by a single outbound request to the glossary source.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The source answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code returned.
        status: reqwest::StatusCode,
        /// URL that was requested.
        url: String,
    },

    /// A URL could not be parsed or resolved.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type alias using [`FetchError`].
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors from reading or writing the on-disk lexicon snapshot.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Filesystem access failed.
    #[error("cache i/o failed for {path}: {source}")]
    Io {
        /// Path of the cache file (or its directory).
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The snapshot is not a JSON array of strings.
    #[error("cache file {path} is not a word list: {source}")]
    Json {
        /// Path of the cache file.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Result type alias using [`CacheError`].
pub type CacheResult<T> = Result<T, CacheError>;
