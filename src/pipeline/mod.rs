//! Two-stage normalization: rule-based replacement, then vocabulary
//! correction.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::correction::{ConfigError, CorrectionDetail, TextCorrector};
use crate::replacement::{CompiledRuleSet, ReplacementError, ReplacementReport, ReplacementRuleSet};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Replacement(#[from] ReplacementError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Final text plus what each stage changed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationOutput {
    pub text: String,
    pub replacements: Vec<ReplacementReport>,
    pub corrections: Vec<CorrectionDetail>,
}

/// Rule sets compiled once, plus an optional corrector
pub struct Pipeline {
    rule_sets: Vec<CompiledRuleSet>,
    corrector: Option<TextCorrector>,
}

impl Pipeline {
    pub fn new(
        rule_sets: &[ReplacementRuleSet],
        corrector: Option<TextCorrector>,
    ) -> Result<Self, PipelineError> {
        let rule_sets = rule_sets
            .iter()
            .map(CompiledRuleSet::compile)
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "Pipeline ready: {} rule set(s), correction {}",
            rule_sets.len(),
            corrector
                .as_ref()
                .map_or("disabled", |c| c.algorithm_name())
        );

        Ok(Self {
            rule_sets,
            corrector,
        })
    }

    pub fn rule_set_count(&self) -> usize {
        self.rule_sets.len()
    }

    pub fn corrector(&self) -> Option<&TextCorrector> {
        self.corrector.as_ref()
    }

    pub fn run(&self, text: &str) -> NormalizationOutput {
        let mut current = text.to_string();
        let mut replacements = Vec::new();

        for rule_set in &self.rule_sets {
            let (next, report) = rule_set.apply(&current);
            if let Some(report) = report {
                debug!(
                    "Rule set {} replaced {} occurrence(s)",
                    report.category,
                    report.matches.len()
                );
                replacements.push(report);
            }
            current = next;
        }

        let corrections = match &self.corrector {
            Some(corrector) => {
                let result = corrector.correct_text(&current);
                current = result.corrected_text;
                result.corrections
            }
            None => Vec::new(),
        };

        NormalizationOutput {
            text: current,
            replacements,
            corrections,
        }
    }
}
