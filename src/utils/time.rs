use chrono::NaiveDate;

/// This is the standard way of converting a date to a day marker in fittrack.
pub fn date_to_marker(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Long form used on the dashboard, e.g. "Sunday, October 18, 2026".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Short form used in exported summaries, e.g. "10/18/2026".
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{date_to_marker, long_date, short_date};

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(date_to_marker(date), "2026-03-07");
        assert_eq!(long_date(date), "Saturday, March 7, 2026");
        assert_eq!(short_date(date), "3/7/2026");
    }
}
