// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Interpret a report cell as a date or a time of day, returning the
/// Excel serial value together with its number format.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return naive_date_to_excel_serial(d).map(|serial| ("yyyy-mm-dd", serial));
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M:%S") {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm:ss", seconds / 86400.0));
    }

    None
}

fn naive_date_to_excel_serial(d: NaiveDate) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}
