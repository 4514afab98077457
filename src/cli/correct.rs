//! CLI handler for vocabulary correction only.

use anyhow::{Context, Result};

use crate::cli::args::{CorrectCliArgs, OutputFormat};
use crate::cli::build_corrector;
use crate::cli::io::{read_input, write_output};
use crate::config::Config;

pub fn handle_correct_command(args: CorrectCliArgs, config: &Config) -> Result<()> {
    let corrector = build_corrector(config, &args.tuning, &args.vocabulary)?.context(
        "No vocabulary: pass --vocabulary or set sources.vocabulary_files in the config",
    )?;

    let input = read_input(args.io.input.as_deref())?;
    let result = corrector.correct_text(&input);

    match args.io.format {
        OutputFormat::Text => {
            let summary = result.summary();
            for entry in &summary.entries {
                eprintln!(
                    "{} -> {} (x{})",
                    entry.original, entry.corrected, entry.occurrences
                );
            }
            if summary.total > 0 {
                eprintln!("{} correction(s)", summary.total);
            }
            write_output(args.io.output.as_ref(), &result.corrected_text)
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
            write_output(args.io.output.as_ref(), &json)
        }
    }
}
