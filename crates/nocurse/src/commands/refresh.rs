//! Refresh command: rebuild the lexicon from the glossary source.

use std::time::Duration;

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use nocurse_core::LexiconStore;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `refresh` subcommand.
#[derive(Args, Debug, Default)]
pub struct RefreshArgs {}

#[derive(Serialize)]
struct RefreshReport {
    words: usize,
    cache: String,
}

fn spinner(hidden: bool) -> anyhow::Result<ProgressBar> {
    if hidden {
        return Ok(ProgressBar::hidden());
    }
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner} {msg} [{elapsed}]")?);
    bar.set_message("fetching glossary from Wiktionary");
    bar.enable_steady_tick(Duration::from_millis(120));
    Ok(bar)
}

/// Force a rebuild, ignoring any cached lexicon, and rewrite the cache.
#[instrument(name = "cmd_refresh", skip_all)]
pub async fn cmd_refresh(
    _args: RefreshArgs,
    global_json: bool,
    quiet: bool,
    store: &LexiconStore,
) -> anyhow::Result<()> {
    debug!(cache = %store.cache().path(), "executing refresh command");

    let bar = spinner(global_json || quiet)?;
    let words = store.refresh().await;
    bar.finish_and_clear();

    let report = RefreshReport {
        words,
        cache: store.cache().path().to_string(),
    };
    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {} words, cached at {}",
            "Rebuilt:".if_supports_color(Stream::Stdout, |t| t.green()),
            report.words,
            report.cache
        );
    }
    Ok(())
}
