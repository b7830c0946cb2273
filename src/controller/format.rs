//! Time and progress formatting for the now-playing display.

/// A duration the progress math can divide by: finite and positive.
pub fn valid_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|d| d.is_finite() && *d > 0.0)
}

/// Format seconds as `m:ss` (minutes unpadded, seconds zero-padded).
///
/// Negative or non-finite input renders as `0:00`.
pub fn format_clock(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "0:00".to_string();
    }
    let whole = secs.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// Seek-bar fill in percent, or `None` while the duration is unusable.
pub fn progress_percent(current_time: f64, duration: Option<f64>) -> Option<f64> {
    valid_duration(duration).map(|d| current_time / d * 100.0)
}
