/// Trait for turning a word or phrase into a coarse phonetic key
pub trait PhoneticAlgorithm: Send + Sync {
    /// Encode text into its phonetic key. Must be deterministic.
    fn encode(&self, text: &str) -> String;

    /// Get the name of this algorithm for logging
    fn name(&self) -> &'static str;
}
