use chrono::{DateTime, NaiveDate};

/// Format a stored ISO-8601 date or timestamp string for display,
/// e.g. `"2026-08-06"` -> `"August 6, 2026"`.
///
/// Unparseable input is echoed back unchanged rather than failing.
pub fn format_long_date(value: &str) -> String {
    let date = DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Whole days from `from` until `deadline`. Negative once the deadline has
/// passed.
pub fn days_until(deadline: NaiveDate, from: NaiveDate) -> i64 {
    (deadline - from).num_days()
}

/// Format a minute count as an hour+minute display, omitting the hour
/// component for sub-hour inputs: `125` -> `"2h 5m"`, `45` -> `"45m"`.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_date_only_strings() {
        assert_eq!(format_long_date("2026-08-06"), "August 6, 2026");
        assert_eq!(format_long_date("2025-01-01"), "January 1, 2025");
    }

    #[test]
    fn formats_full_timestamps() {
        assert_eq!(format_long_date("2026-03-15T09:30:00Z"), "March 15, 2026");
    }

    #[test]
    fn echoes_unparseable_input() {
        assert_eq!(format_long_date("someday"), "someday");
    }

    #[test]
    fn counts_days_to_deadline() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let deadline = NaiveDate::from_ymd_opt(2026, 8, 20).unwrap();
        assert_eq!(days_until(deadline, today), 14);
        assert_eq!(days_until(today, deadline), -14);
        assert_eq!(days_until(today, today), 0);
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(125), "2h 5m");
        assert_eq!(format_duration(60), "1h 0m");
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(0), "0m");
    }
}
