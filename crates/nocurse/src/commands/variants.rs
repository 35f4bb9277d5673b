//! Variants command: show what the variant generator produces for a word.

use clap::Args;
use nocurse_core::{letter_variants, morphological_forms};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `variants` subcommand.
#[derive(Args, Debug)]
pub struct VariantsArgs {
    /// Word to expand.
    pub word: String,

    /// Include inflected forms and curated root forms, not just е/ё spellings.
    #[arg(long)]
    pub forms: bool,
}

#[derive(Serialize)]
struct VariantsReport {
    word: String,
    variants: Vec<String>,
}

fn expand(args: &VariantsArgs) -> VariantsReport {
    let word = args.word.trim().to_lowercase();
    let set = if args.forms {
        morphological_forms(&word)
    } else {
        letter_variants(&word)
    };
    let mut variants: Vec<String> = set.into_iter().collect();
    variants.sort_unstable();
    VariantsReport { word, variants }
}

/// Print the generated variants, one per line, sorted.
#[instrument(name = "cmd_variants", skip_all, fields(word = %args.word))]
pub fn cmd_variants(args: VariantsArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(forms = args.forms, "executing variants command");

    let report = expand(&args);
    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for variant in &report.variants {
            println!("{variant}");
        }
    }
    Ok(())
}
