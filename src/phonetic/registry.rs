use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::phonetic::{DoubleMetaphone, FrenchPhonetic, FrenchSkeleton, PhoneticAlgorithm};

/// Selectable phonetic encoders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PhoneticKind {
    /// Classic Double Metaphone, language agnostic
    #[default]
    #[serde(alias = "doublemetaphone", alias = "metaphone")]
    #[value(aliases = ["doublemetaphone", "metaphone"])]
    DoubleMetaphone,
    /// Accent folding and spoken-form spelling, vowels kept
    #[serde(alias = "french-phonetic")]
    #[value(alias = "french-phonetic")]
    French,
    /// Consonant skeleton of the spoken French form
    #[serde(alias = "french-dense")]
    #[value(alias = "french-dense")]
    FrenchSkeleton,
}

impl PhoneticKind {
    pub const ALL: [PhoneticKind; 3] = [
        PhoneticKind::DoubleMetaphone,
        PhoneticKind::French,
        PhoneticKind::FrenchSkeleton,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneticKind::DoubleMetaphone => "double-metaphone",
            PhoneticKind::French => "french",
            PhoneticKind::FrenchSkeleton => "french-skeleton",
        }
    }

    /// Instantiate the encoder for this kind
    pub fn build(&self) -> Box<dyn PhoneticAlgorithm> {
        info!("Creating {} phonetic encoder", self);
        match self {
            PhoneticKind::DoubleMetaphone => Box::new(DoubleMetaphone::new()),
            PhoneticKind::French => Box::new(FrenchPhonetic::new()),
            PhoneticKind::FrenchSkeleton => Box::new(FrenchSkeleton::new()),
        }
    }
}

impl fmt::Display for PhoneticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhoneticKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "double-metaphone" | "doublemetaphone" | "metaphone" => {
                Ok(PhoneticKind::DoubleMetaphone)
            }
            "french" | "french-phonetic" => Ok(PhoneticKind::French),
            "french-skeleton" | "french-dense" => Ok(PhoneticKind::FrenchSkeleton),
            other => bail!(
                "Unknown phonetic algorithm: {}. Supported: double-metaphone, french, french-skeleton",
                other
            ),
        }
    }
}
