pub mod cli;
pub mod config;
pub mod correction;
pub mod global;
pub mod phonetic;
pub mod pipeline;
pub mod replacement;
pub mod similarity;
pub mod sources;
