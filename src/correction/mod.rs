mod corrector;
mod settings;
mod types;

pub use corrector::TextCorrector;
pub use settings::{ConfigError, CorrectorSettings};
pub use types::{CorrectionDetail, CorrectionResult, CorrectionSummary, MatchType, SummaryEntry};
