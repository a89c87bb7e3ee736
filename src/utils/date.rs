use super::time::SECONDS_PER_DAY;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Date layouts produced by the badge readers we have seen in the field.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d", "%d/%m/%Y"];

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Some exports put a full timestamp in the Date column ("2025-11-03 00:00:00").
/// Only the date part is kept in that case.
pub fn parse_date_lenient(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    parse_date(s).or_else(|| {
        s.split_whitespace()
            .next()
            .and_then(parse_date)
    })
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Timestamp suffix used when an output file has to be renamed.
pub fn stamp_suffix(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%d_%H%M%S").to_string()
}

/// Excel serial (days since 1899-12-30, fraction = time of day), rounded
/// to the second.
pub fn from_excel_serial(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let secs = (serial * SECONDS_PER_DAY as f64).round() as i64;
    epoch.checked_add_signed(TimeDelta::seconds(secs))
}
