//! Check command: run profanity detection on text.

use anyhow::bail;
use clap::Args;
use nocurse_core::{LexiconStore, Verdict};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use super::read_lines;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Text to check. Each argument is checked separately; reads lines from
    /// stdin when omitted.
    pub text: Vec<String>,

    /// Exit with an error if any input is profane.
    #[arg(long)]
    pub deny: bool,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    text: &'a str,
    #[serde(flatten)]
    verdict: &'a Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Format a verdict as a single line.
fn render(verdict: &Verdict) -> String {
    match verdict.reason_text() {
        Some(reason) if verdict.is_profane => format!(
            "{} {reason}",
            "PROFANE:".if_supports_color(Stream::Stdout, |t| t.red())
        ),
        _ => "CLEAN"
            .if_supports_color(Stream::Stdout, |t| t.green())
            .to_string(),
    }
}

/// Check each input and print one verdict per input.
#[instrument(name = "cmd_check", skip_all)]
pub async fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    store: &LexiconStore,
) -> anyhow::Result<()> {
    let inputs = if args.text.is_empty() {
        read_lines(std::io::stdin().lock())?
    } else {
        args.text
    };
    debug!(inputs = inputs.len(), deny = args.deny, "executing check command");

    store.initialize().await;
    let lexicon = store.snapshot();
    let verdicts: Vec<Verdict> = inputs
        .iter()
        .map(|text| nocurse_core::detect(&lexicon, text.as_str()))
        .collect();

    if global_json {
        let reports: Vec<CheckReport<'_>> = inputs
            .iter()
            .zip(&verdicts)
            .map(|(text, verdict)| CheckReport {
                text,
                verdict,
                message: verdict.reason_text(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for verdict in &verdicts {
            println!("{}", render(verdict));
        }
    }

    let profane = verdicts.iter().filter(|v| v.is_profane).count();
    if args.deny && profane > 0 {
        bail!("{profane} of {} inputs contain profanity", verdicts.len());
    }
    Ok(())
}
