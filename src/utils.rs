/// Round to exactly 2 decimal digits. Applied to every measurement value
/// before it is stored or displayed.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Truncate a string to at most `max` characters for aligned table output.
pub fn clip(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}
