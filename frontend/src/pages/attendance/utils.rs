use crate::{
    api::AttendanceRecord,
    domain::Category,
    utils::time,
};
use chrono::NaiveDate;

const UNKNOWN_STATUS_COLOR: &str = "#9E9E9E";

/// Value of an `<input type="month">` for the month containing `day`.
pub fn month_value(day: NaiveDate) -> String {
    day.format("%Y-%m").to_string()
}

/// First and last day of a `YYYY-MM` month.
pub fn parse_month(raw: &str) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d").ok()?;
    time::month_bounds(first)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: String,
    pub date: String,
    pub status_label: String,
    pub status_color: String,
    pub check_in: String,
    pub check_out: String,
}

/// Newest day first. Records whose status is unknown keep their raw value
/// as the label.
pub fn history_rows(records: &[AttendanceRecord]) -> Vec<HistoryRow> {
    let mut rows: Vec<(Option<NaiveDate>, HistoryRow)> = records
        .iter()
        .map(|record| {
            let (label, color) = match record.status() {
                Some(status) => (status.label().to_string(), status.color().to_string()),
                None => (
                    record.status.clone().unwrap_or_else(|| "-".into()),
                    UNKNOWN_STATUS_COLOR.to_string(),
                ),
            };
            let day = time::parse_day(&record.date);
            let row = HistoryRow {
                id: record.id.clone(),
                date: day.map(time::format_date).unwrap_or_else(|| record.date.clone()),
                status_label: label,
                status_color: color,
                check_in: format_clock(record.check_in.as_deref()),
                check_out: format_clock(record.check_out.as_deref()),
            };
            (day, row)
        })
        .collect();
    rows.sort_by(|a, b| b.0.cmp(&a.0));
    rows.into_iter().map(|(_, row)| row).collect()
}

/// `HH:MM` from a time or ISO datetime string.
pub fn format_clock(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".into();
    };
    let time_part = raw.split_once('T').map(|(_, t)| t).unwrap_or(raw);
    match time_part.get(..5) {
        Some(hm) if hm.as_bytes().get(2) == Some(&b':') => hm.to_string(),
        _ => "-".into(),
    }
}
