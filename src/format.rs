//! Display formatting helpers for result metadata.

use chrono::{DateTime, Utc};

/// Compact count display: `1499` → `1.5k`, `2_300_000` → `2.3M`.
pub fn format_number(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}k", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Relative timestamp display against an explicit reference instant.
///
/// Future timestamps (clock skew) collapse to `just now`.
pub fn relative_from(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let months = days / 30;
    let years = months / 12;

    if years > 0 {
        plural(years, "year")
    } else if months > 0 {
        plural(months, "month")
    } else if days > 0 {
        plural(days, "day")
    } else if hours > 0 {
        plural(hours, "hour")
    } else if minutes > 0 {
        plural(minutes, "minute")
    } else {
        "just now".to_string()
    }
}

/// Relative timestamp display against the current time.
pub fn format_relative_time(timestamp: DateTime<Utc>) -> String {
    relative_from(timestamp, Utc::now())
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Char-safe truncation with a trailing `...` marker.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let prefix: String = text.chars().take(max_chars).collect();
    format!("{prefix}...")
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn numbers_compact_at_thousand_and_million() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1.0k");
        assert_eq!(format_number(1_499), "1.5k");
        assert_eq!(format_number(999_999), "1000.0k");
        assert_eq!(format_number(2_300_000), "2.3M");
    }

    #[test]
    fn relative_time_picks_largest_unit() {
        let now = Utc::now();
        assert_eq!(relative_from(now - Duration::seconds(30), now), "just now");
        assert_eq!(relative_from(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_from(now - Duration::hours(5), now), "5 hours ago");
        assert_eq!(relative_from(now - Duration::days(1), now), "1 day ago");
        assert_eq!(relative_from(now - Duration::days(45), now), "1 month ago");
        assert_eq!(relative_from(now - Duration::days(800), now), "2 years ago");
    }

    #[test]
    fn future_timestamps_collapse_to_just_now() {
        let now = Utc::now();
        assert_eq!(relative_from(now + Duration::hours(2), now), "just now");
    }

    #[test]
    fn truncation_is_char_safe() {
        assert_eq!(truncate_text("short", 100), "short");
        assert_eq!(truncate_text("abcdefgh", 3), "abc...");
        // Multi-byte chars must not be split mid-codepoint.
        assert_eq!(truncate_text("héllo wörld", 4), "héll...");
    }
}
