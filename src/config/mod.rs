use crate::correction::CorrectorSettings;
use crate::global;
use crate::phonetic::PhoneticKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub correction: CorrectionConfig,
    pub sources: SourcesConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectionConfig {
    /// Phonetic encoder used to compare sounds
    pub algorithm: PhoneticKind,
    /// Minimum score for a correction to be applied
    pub threshold: f64,
    /// Share of plain string similarity in the score (0..=1)
    pub string_weight: f64,
    /// Penalty for phonetic keys of different lengths (0..=1)
    pub length_weight: f64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Rule documents used when none are given on the command line
    pub rule_files: Vec<PathBuf>,
    /// Vocabulary lists used when none are given on the command line
    pub vocabulary_files: Vec<PathBuf>,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        let settings = CorrectorSettings::default();
        Self {
            algorithm: PhoneticKind::default(),
            threshold: settings.threshold,
            string_weight: settings.string_weight,
            length_weight: settings.length_weight,
        }
    }
}

impl From<&CorrectionConfig> for CorrectorSettings {
    fn from(config: &CorrectionConfig) -> Self {
        Self {
            threshold: config.threshold,
            string_weight: config.string_weight,
            length_weight: config.length_weight,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        global::config_file()
    }
}
