//! Countdown display formatting.

/// Render whole seconds as `MM:SS`, or `H:MM:SS` once an hour or more remains.
///
/// Minutes and seconds are always two digits; hours are not padded.
pub fn format_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
