use chrono::{DateTime, NaiveDate, Utc};

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Render a date range the way the list and modals show it; a single-day
/// request collapses to one date.
pub fn format_date_range(start: &NaiveDate, end: &NaiveDate) -> String {
    if start == end {
        start.format("%Y-%m-%d").to_string()
    } else {
        format!("{} – {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_timestamp_uses_minute_precision() {
        let ts = Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 45).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-02-01 09:30");
    }

    #[test]
    fn format_date_range_collapses_single_day() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        assert_eq!(format_date_range(&start, &end), "2024-02-01 – 2024-02-05");
        assert_eq!(format_date_range(&start, &start), "2024-02-01");
    }
}
