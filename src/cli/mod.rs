use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{Config, CorrectionConfig};
use crate::correction::{CorrectorSettings, TextCorrector};
use crate::phonetic::PhoneticKind;
use crate::replacement::ReplacementRuleSet;
use crate::sources;

pub mod args;
pub mod correct;
pub mod encode;
pub mod io;
pub mod normalize;
pub mod replace;
pub mod validate;

pub use args::{Cli, CliCommand, OutputFormat};
pub use correct::handle_correct_command;
pub use encode::handle_encode_command;
pub use normalize::handle_normalize_command;
pub use replace::handle_replace_command;
pub use validate::handle_validate_command;

use args::TuningArgs;

/// Load the config given with `--config`, or the default one.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Command-line tuning flags take precedence over the config file.
fn correction_settings(
    config: &CorrectionConfig,
    tuning: &TuningArgs,
) -> (PhoneticKind, CorrectorSettings) {
    let mut settings = CorrectorSettings::from(config);
    if let Some(threshold) = tuning.threshold {
        settings.threshold = threshold;
    }
    if let Some(string_weight) = tuning.string_weight {
        settings.string_weight = string_weight;
    }
    if let Some(length_weight) = tuning.length_weight {
        settings.length_weight = length_weight;
    }
    (tuning.algorithm.unwrap_or(config.algorithm), settings)
}

/// Explicit files win over the ones listed in the config.
fn pick_files<'a>(explicit: &'a [PathBuf], configured: &'a [PathBuf]) -> &'a [PathBuf] {
    if explicit.is_empty() {
        configured
    } else {
        explicit
    }
}

fn load_rule_sets(config: &Config, explicit: &[PathBuf]) -> Result<Vec<ReplacementRuleSet>> {
    let files = pick_files(explicit, &config.sources.rule_files);
    debug!("Loading rule sets from {} file(s)", files.len());
    sources::load_all_rule_sets(files)
}

/// Build a corrector when vocabulary files are available.
fn build_corrector(
    config: &Config,
    tuning: &TuningArgs,
    explicit: &[PathBuf],
) -> Result<Option<TextCorrector>> {
    let files = pick_files(explicit, &config.sources.vocabulary_files);
    if files.is_empty() {
        return Ok(None);
    }

    let vocabulary = sources::load_vocabulary(files)?;
    let (kind, settings) = correction_settings(&config.correction, tuning);
    let corrector = TextCorrector::new(kind.build(), settings)
        .context("Invalid correction settings")?
        .with_vocabulary(vocabulary);

    Ok(Some(corrector))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let config = CorrectionConfig::default();
        let tuning = TuningArgs {
            algorithm: Some(PhoneticKind::French),
            threshold: Some(0.9),
            string_weight: None,
            length_weight: Some(0.4),
        };

        let (kind, settings) = correction_settings(&config, &tuning);

        assert_eq!(kind, PhoneticKind::French);
        assert_eq!(settings.threshold, 0.9);
        assert_eq!(settings.string_weight, config.string_weight);
        assert_eq!(settings.length_weight, 0.4);
    }

    #[test]
    fn test_config_used_without_flags() {
        let config = CorrectionConfig {
            algorithm: PhoneticKind::FrenchSkeleton,
            ..Default::default()
        };
        let (kind, settings) = correction_settings(&config, &TuningArgs::default());

        assert_eq!(kind, PhoneticKind::FrenchSkeleton);
        assert_eq!(settings, CorrectorSettings::default());
    }

    #[test]
    fn test_pick_files() {
        let explicit = vec![PathBuf::from("a.toml")];
        let configured = vec![PathBuf::from("b.toml")];

        assert_eq!(pick_files(&explicit, &configured), explicit.as_slice());
        assert_eq!(pick_files(&[], &configured), configured.as_slice());
    }

    #[test]
    fn test_no_vocabulary_means_no_corrector() {
        let corrector = build_corrector(&Config::default(), &TuningArgs::default(), &[]).unwrap();
        assert!(corrector.is_none());
    }

    #[test]
    fn test_invalid_weight_from_flags() {
        let dir = tempfile::tempdir().unwrap();
        let terms = dir.path().join("terms.txt");
        std::fs::write(&terms, "Hafas\n").unwrap();

        let tuning = TuningArgs {
            string_weight: Some(1.5),
            ..Default::default()
        };
        let result = build_corrector(&Config::default(), &tuning, &[terms]);
        assert!(result.is_err());
    }
}
