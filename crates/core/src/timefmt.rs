//! Recording-time formatting.

/// Format an elapsed second count as `HH:MM:SS` with two-digit zero-padded
/// fields. The hour field is not clamped: counts of 100 hours or more simply
/// widen it to three or more digits.
pub fn format_time(seconds: u64) -> String {
    let hrs = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hrs:02}:{mins:02}:{secs:02}")
}
