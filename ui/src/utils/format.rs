use chrono::{DateTime, Utc};

/// Format a migration timestamp the way the table displays it,
/// e.g. `January 15, 2024, 10:30`.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y, %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_long_month_without_day_padding() {
        let timestamp: DateTime<Utc> = "2024-01-05T10:30:00Z".parse().unwrap();
        assert_eq!(format_timestamp(&timestamp), "January 5, 2024, 10:30");
    }

    #[test]
    fn keeps_two_digit_minutes() {
        let timestamp: DateTime<Utc> = "2023-12-31T23:05:00Z".parse().unwrap();
        assert_eq!(format_timestamp(&timestamp), "December 31, 2023, 23:05");
    }
}
