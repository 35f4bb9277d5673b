//! Command implementations.

use std::io::BufRead;

use anyhow::Context;
use nocurse_core::{Config, LexiconStore};

pub mod add;
pub mod check;
pub mod info;
pub mod refresh;
pub mod variants;

/// Build the lexicon store for the loaded configuration.
///
/// The store is not initialized; commands decide whether to load the cache
/// or force a rebuild.
pub fn open_store(config: &Config) -> anyhow::Result<LexiconStore> {
    LexiconStore::from_config(config).context("failed to set up the glossary source")
}

/// Read non-empty, trimmed lines from a reader.
pub fn read_lines<R: BufRead>(reader: R) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read input")?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_lines_skips_blank_lines() {
        let input = "первая\n\n   \n  вторая  \n";
        let lines = read_lines(input.as_bytes()).unwrap();
        assert_eq!(lines, vec!["первая", "вторая"]);
    }

    #[test]
    fn read_lines_empty_input() {
        assert!(read_lines("".as_bytes()).unwrap().is_empty());
    }
}
