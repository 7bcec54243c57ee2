//! String formatting utilities for UI rendering.

use chrono::NaiveDateTime;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Read status label.
pub fn read_label(read_status: bool) -> &'static str {
    if read_status {
        "Read"
    } else {
        "Unread"
    }
}

/// Percentage with one decimal place, e.g. "66.7%".
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Added date for display.
pub fn format_added_date(dt: &NaiveDateTime, pretty: bool) -> String {
    if pretty {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

/// Decade label, e.g. "1990s".
pub fn decade_label(decade: i32) -> String {
    format!("{}s", decade)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("The Left Hand of Darkness", 12), "The Left ...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(200.0 / 3.0), "66.7%");
    }

    #[test]
    fn test_format_added_date() {
        let dt = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(format_added_date(&dt, true), "2025-03-14");
        assert_eq!(format_added_date(&dt, false), "2025-03-14T09:05:00");
    }

    #[test]
    fn test_labels() {
        assert_eq!(read_label(true), "Read");
        assert_eq!(read_label(false), "Unread");
        assert_eq!(decade_label(1980), "1980s");
    }
}
