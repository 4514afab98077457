//! CLI handler for rule-based replacement only.

use anyhow::{bail, Context, Result};

use crate::cli::args::{InputArgs, OutputFormat, ReplaceCliArgs};
use crate::cli::io::{read_input, write_output};
use crate::cli::load_rule_sets;
use crate::config::Config;
use crate::replacement::{
    apply_replacements, replacement_statistics, ReplacementOutcome, ReplacementStatistics,
};

pub fn handle_replace_command(args: ReplaceCliArgs, config: &Config) -> Result<()> {
    let rule_sets = load_rule_sets(config, &args.rules)?;
    if rule_sets.is_empty() {
        bail!("No replacement rules: pass --rules or set sources.rule_files in the config");
    }

    let input = read_input(args.io.input.as_deref())?;
    let outcome = match apply_replacements(&input, &rule_sets) {
        Ok(outcome) => outcome,
        Err(failure) => {
            eprintln!(
                "Writing partial result from {} rule set(s)",
                failure.applied_sets
            );
            write_outcome(&args.io, &failure.partial)?;
            return Err(anyhow::Error::new(failure).context("Failed to apply replacement rules"));
        }
    };

    if args.stats {
        eprint!("{}", format_statistics(&replacement_statistics(&outcome.reports)));
    }

    write_outcome(&args.io, &outcome)
}

fn write_outcome(io: &InputArgs, outcome: &ReplacementOutcome) -> Result<()> {
    match io.format {
        OutputFormat::Text => write_output(io.output.as_ref(), &outcome.text),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(outcome).context("Failed to serialize result")?;
            write_output(io.output.as_ref(), &json)
        }
    }
}

fn format_statistics(statistics: &[ReplacementStatistics]) -> String {
    if statistics.is_empty() {
        return "No replacements made.\n".to_string();
    }

    let mut out = String::new();
    for category in statistics {
        out.push_str(&format!("{}:\n", category.category));
        for count in &category.replacements {
            out.push_str(&format!("  {} -> {} (x{})\n", count.from, count.to, count.count));
        }
    }
    out
}
