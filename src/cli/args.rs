use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::phonetic::PhoneticKind;

#[derive(Parser, Debug)]
#[command(name = "transcript-normalizer")]
#[command(about = "Clean up speech-to-text transcripts", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this config file instead of the default one
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Apply replacement rules, then vocabulary correction
    Normalize(NormalizeCliArgs),
    /// Apply replacement rules only
    Replace(ReplaceCliArgs),
    /// Apply vocabulary correction only
    Correct(CorrectCliArgs),
    /// Print the phonetic key of each argument
    Encode(EncodeCliArgs),
    /// Check rule files for rules that would be skipped or fail
    Validate(ValidateCliArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    #[default]
    Text,
    /// JSON with reports
    Json,
}

#[derive(ClapArgs, Debug, Default)]
pub struct InputArgs {
    /// Transcript to read ("-" or omitted for stdin)
    pub input: Option<PathBuf>,
    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug, Default)]
pub struct TuningArgs {
    /// Phonetic encoder (overrides config)
    #[arg(short, long, value_enum)]
    pub algorithm: Option<PhoneticKind>,
    /// Minimum score for a correction (overrides config)
    #[arg(long)]
    pub threshold: Option<f64>,
    /// Share of string similarity in the score, 0 to 1 (overrides config)
    #[arg(long)]
    pub string_weight: Option<f64>,
    /// Penalty for phonetic keys of different lengths, 0 to 1 (overrides config)
    #[arg(long)]
    pub length_weight: Option<f64>,
}

#[derive(ClapArgs, Debug)]
pub struct NormalizeCliArgs {
    #[command(flatten)]
    pub io: InputArgs,
    /// Rule file (.toml or .json), repeatable
    #[arg(short, long = "rules")]
    pub rules: Vec<PathBuf>,
    /// Vocabulary file (.toml, .json or one term per line), repeatable
    #[arg(short = 'w', long = "vocabulary")]
    pub vocabulary: Vec<PathBuf>,
    #[command(flatten)]
    pub tuning: TuningArgs,
}

#[derive(ClapArgs, Debug)]
pub struct ReplaceCliArgs {
    #[command(flatten)]
    pub io: InputArgs,
    /// Rule file (.toml or .json), repeatable
    #[arg(short, long = "rules")]
    pub rules: Vec<PathBuf>,
    /// Print per-category replacement counts to stderr
    #[arg(long)]
    pub stats: bool,
}

#[derive(ClapArgs, Debug)]
pub struct CorrectCliArgs {
    #[command(flatten)]
    pub io: InputArgs,
    /// Vocabulary file (.toml, .json or one term per line), repeatable
    #[arg(short = 'w', long = "vocabulary")]
    pub vocabulary: Vec<PathBuf>,
    #[command(flatten)]
    pub tuning: TuningArgs,
}

#[derive(ClapArgs, Debug)]
pub struct EncodeCliArgs {
    /// Words or phrases to encode
    #[arg(required = true)]
    pub text: Vec<String>,
    /// Phonetic encoder (overrides config)
    #[arg(short, long, value_enum)]
    pub algorithm: Option<PhoneticKind>,
}

#[derive(ClapArgs, Debug)]
pub struct ValidateCliArgs {
    /// Rule files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalize() {
        let cli = Cli::try_parse_from([
            "transcript-normalizer",
            "normalize",
            "talk.txt",
            "-r",
            "speakers.toml",
            "--rules",
            "products.json",
            "-w",
            "terms.txt",
            "--algorithm",
            "french-skeleton",
            "--threshold",
            "0.75",
            "--format",
            "json",
        ])
        .unwrap();

        let CliCommand::Normalize(args) = cli.command else {
            panic!("expected normalize");
        };
        assert_eq!(args.io.input, Some(PathBuf::from("talk.txt")));
        assert_eq!(args.rules.len(), 2);
        assert_eq!(args.vocabulary, vec![PathBuf::from("terms.txt")]);
        assert_eq!(args.tuning.algorithm, Some(PhoneticKind::FrenchSkeleton));
        assert_eq!(args.tuning.threshold, Some(0.75));
        assert_eq!(args.io.format, OutputFormat::Json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "transcript-normalizer",
            "encode",
            "hafas",
            "--verbose",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        let CliCommand::Encode(args) = cli.command else {
            panic!("expected encode");
        };
        assert_eq!(args.text, vec!["hafas"]);
        assert_eq!(args.algorithm, None);
    }

    #[test]
    fn test_replace_defaults_to_stdin_text() {
        let cli = Cli::try_parse_from(["transcript-normalizer", "replace", "--stats"]).unwrap();

        let CliCommand::Replace(args) = cli.command else {
            panic!("expected replace");
        };
        assert!(args.stats);
        assert!(args.io.input.is_none());
        assert_eq!(args.io.format, OutputFormat::Text);
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let result = Cli::try_parse_from([
            "transcript-normalizer",
            "encode",
            "hafas",
            "--algorithm",
            "soundex",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_requires_files() {
        assert!(Cli::try_parse_from(["transcript-normalizer", "validate"]).is_err());
    }
}
