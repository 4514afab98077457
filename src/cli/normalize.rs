//! CLI handler for the full two-stage pipeline.

use anyhow::{Context, Result};

use crate::cli::args::{NormalizeCliArgs, OutputFormat};
use crate::cli::io::{read_input, write_output};
use crate::cli::{build_corrector, load_rule_sets};
use crate::config::Config;
use crate::pipeline::{NormalizationOutput, Pipeline};

pub fn handle_normalize_command(args: NormalizeCliArgs, config: &Config) -> Result<()> {
    let rule_sets = load_rule_sets(config, &args.rules)?;
    let corrector = build_corrector(config, &args.tuning, &args.vocabulary)?;
    let pipeline =
        Pipeline::new(&rule_sets, corrector).context("Failed to compile replacement rules")?;

    let input = read_input(args.io.input.as_deref())?;
    let output = pipeline.run(&input);

    match args.io.format {
        OutputFormat::Text => {
            eprint!("{}", format_changes(&output));
            write_output(args.io.output.as_ref(), &output.text)
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&output)
                .context("Failed to serialize result")?;
            write_output(args.io.output.as_ref(), &json)
        }
    }
}

/// Human-readable list of what each stage changed
pub fn format_changes(output: &NormalizationOutput) -> String {
    let mut lines = Vec::new();

    for report in &output.replacements {
        lines.push(format!("[{}]", report.category));
        for m in &report.matches {
            lines.push(format!("  {} -> {}", m.matched_text, m.target));
        }
    }

    if !output.corrections.is_empty() {
        lines.push("[Corrections]".to_string());
        for detail in &output.corrections {
            lines.push(format!(
                "  {} -> {} ({:.2})",
                detail.original, detail.corrected, detail.similarity_score
            ));
        }
    }

    if lines.is_empty() {
        return String::new();
    }
    lines.push(String::new());
    lines.join("\n")
}
