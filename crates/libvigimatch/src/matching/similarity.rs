use strsim::sorensen_dice;

/// Normalized character-run similarity between two strings.
///
/// Sørensen-Dice over character bigrams: a ratio metric in [0, 1],
/// symmetric, and 1.0 for identical non-empty input — the properties the
/// scoring thresholds are calibrated against.
pub fn similarity(a: &str, b: &str) -> f64 {
  sorensen_dice(a, b)
}
