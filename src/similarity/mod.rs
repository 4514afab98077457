//! String similarity used to score correction candidates.

/// Normalized Levenshtein similarity in `[0, 1]`.
///
/// `1.0` means identical, `0.0` means every position differs. Two empty
/// strings are identical. Lengths are counted in chars, not bytes.
pub fn ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}
