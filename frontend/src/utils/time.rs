use chrono::{Datelike, Duration, Local, Months, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn current_year_month() -> (i32, u32) {
    let now = today();
    (now.year(), now.month())
}

pub fn month_bounds(day: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(day.year(), day.month(), 1)?;
    let next_month = first.checked_add_months(Months::new(1))?;
    let last = next_month.checked_sub_signed(Duration::days(1))?;
    Some((first, last))
}

/// Truncates a wire date to day granularity. Accepts `YYYY-MM-DD` as well as
/// RFC 3339 / naive ISO datetimes, which all start with the calendar date.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let head = trimmed.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

pub fn parse_date_input(value: &str, error_message: &str) -> Result<Option<NaiveDate>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(Some)
        .map_err(|_| error_message.to_string())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds_returns_expected_range() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 18).unwrap();
        let (start, end) = month_bounds(date).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }

    #[test]
    fn parse_day_truncates_datetimes() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 2);
        assert_eq!(parse_day("2025-01-02"), expected);
        assert_eq!(parse_day("2025-01-02T09:15:00"), expected);
        assert_eq!(parse_day("2025-01-02T23:59:59Z"), expected);
        assert_eq!(parse_day("yesterday"), None);
        assert_eq!(parse_day("2025-1-2"), None);
    }

    #[test]
    fn parse_date_input_allows_blank() {
        assert_eq!(parse_date_input("  ", "bad"), Ok(None));
        assert_eq!(parse_date_input("2025/01/01", "bad"), Err("bad".to_string()));
        assert_eq!(
            parse_date_input("2025-01-01", "bad"),
            Ok(NaiveDate::from_ymd_opt(2025, 1, 1))
        );
    }
}
