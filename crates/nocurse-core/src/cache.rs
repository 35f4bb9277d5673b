//! On-disk snapshot of the lexicon.
//!
//! The snapshot is a single JSON array of strings. It is written whole,
//! through a temporary file in the same directory that is then renamed over
//! the target, so a crash mid-write leaves the previous snapshot in place.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::NamedTempFile;

use crate::error::{CacheError, CacheResult};
use crate::lexicon::Lexicon;

/// Reads and writes the lexicon snapshot at a fixed path.
#[derive(Debug, Clone)]
pub struct LexiconCache {
    path: Utf8PathBuf,
}

impl LexiconCache {
    /// A cache backed by the file at `path`.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Create the directory that holds the snapshot.
    ///
    /// Failure is logged and otherwise ignored: the in-memory lexicon works
    /// without a cache, and [`Self::save`] will report the same problem.
    pub fn ensure_dir(&self) {
        let Some(dir) = self.dir() else {
            return;
        };
        if let Err(e) = fs::create_dir_all(dir) {
            tracing::error!(dir = %dir, error = %e, "failed to create cache directory");
        }
    }

    /// Read the snapshot.
    ///
    /// A missing file is `None` without noise. A file that cannot be read or
    /// parsed is logged and also treated as `None`, which triggers a rebuild.
    #[tracing::instrument(skip(self), fields(path = %self.path))]
    pub fn load(&self) -> Option<Lexicon> {
        if !self.path.is_file() {
            tracing::debug!("no cache file");
            return None;
        }
        match self.try_load() {
            Ok(lexicon) => {
                tracing::info!(words = lexicon.len(), "loaded lexicon from cache");
                Some(lexicon)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to read cache file");
                None
            }
        }
    }

    /// Write the snapshot, replacing any previous one.
    ///
    /// Errors are logged and swallowed; callers keep using the lexicon they
    /// already hold in memory.
    #[tracing::instrument(skip(self, lexicon), fields(path = %self.path, words = lexicon.len()))]
    pub fn save(&self, lexicon: &Lexicon) {
        match self.try_save(lexicon) {
            Ok(()) => tracing::debug!("cache written"),
            Err(e) => tracing::error!(error = %e, "failed to write cache file"),
        }
    }

    /// Read the snapshot, surfacing the failure reason.
    pub fn try_load(&self) -> CacheResult<Lexicon> {
        let file = File::open(self.path.as_std_path()).map_err(|source| self.io_error(source))?;
        let words: Vec<String> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| CacheError::Json {
                path: self.path.clone(),
                source,
            })?;
        Ok(words.into_iter().collect())
    }

    /// Write the snapshot, surfacing the failure reason.
    pub fn try_save(&self, lexicon: &Lexicon) -> CacheResult<()> {
        let dir = self.dir().unwrap_or_else(|| Utf8Path::new("."));
        fs::create_dir_all(dir).map_err(|source| self.io_error(source))?;

        let temp_file = NamedTempFile::new_in(dir).map_err(|source| self.io_error(source))?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer_pretty(&mut writer, &lexicon.sorted()).map_err(|source| {
                CacheError::Json {
                    path: self.path.clone(),
                    source,
                }
            })?;
            writer.flush().map_err(|source| self.io_error(source))?;
        }
        temp_file
            .persist(self.path.as_std_path())
            .map_err(|e| self.io_error(e.error))?;
        Ok(())
    }

    fn dir(&self) -> Option<&Utf8Path> {
        self.path.parent().filter(|p| !p.as_str().is_empty())
    }

    fn io_error(&self, source: std::io::Error) -> CacheError {
        CacheError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
