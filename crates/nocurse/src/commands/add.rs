//! Add command: extend the lexicon with a word.

use clap::Args;
use nocurse_core::LexiconStore;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `add` subcommand.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Word to add. Lowercased and trimmed; both е and ё spellings are added.
    pub word: String,
}

#[derive(Serialize)]
struct AddReport<'a> {
    word: &'a str,
    added: usize,
    total: usize,
}

/// Load the lexicon, add the word, and persist the result.
#[instrument(name = "cmd_add", skip_all, fields(word = %args.word))]
pub async fn cmd_add(args: AddArgs, global_json: bool, store: &LexiconStore) -> anyhow::Result<()> {
    debug!("executing add command");

    store.initialize().await;
    let added = store.add_word(&args.word).await;
    let report = AddReport {
        word: args.word.trim(),
        added,
        total: store.snapshot().len(),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if added == 0 {
        println!(
            "{} nothing new for {:?}",
            "Unchanged:".if_supports_color(Stream::Stdout, |t| t.yellow()),
            report.word
        );
    } else {
        println!(
            "{} {} new entries ({} total)",
            "Added:".if_supports_color(Stream::Stdout, |t| t.green()),
            report.added,
            report.total
        );
    }
    Ok(())
}
