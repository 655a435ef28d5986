use chrono::Timelike;

/// Format a time of day as `HH:MM:SS`, 24-hour, zero-padded.
///
/// The loop compares consecutive results to detect the second boundary, so
/// the output must be stable for a given time.
pub fn format_time(t: chrono::NaiveTime) -> String {
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}
