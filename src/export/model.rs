// src/export/model.rs

use crate::models::{AttendanceRecord, Punctuality};
use crate::utils::date::format_date;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Flat attendance row shared by every writer. Field names are the
/// report's column titles.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Shift")]
    pub shift: String,
    #[serde(rename = "Check-in")]
    pub check_in: String,
    #[serde(rename = "Check-in Status")]
    pub check_in_status: String,
    #[serde(rename = "Break Time Out")]
    pub break_out: String,
    #[serde(rename = "Break Time In")]
    pub break_in: String,
    #[serde(rename = "Break Time In Status")]
    pub break_in_status: String,
    #[serde(rename = "Check Out Record")]
    pub check_out: String,
}

fn time_cell(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

impl From<&AttendanceRecord> for RecordExport {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            date: format_date(r.date),
            id: r.employee.id.clone(),
            name: r.employee.name.clone(),
            shift: r.shift.clone(),
            check_in: time_cell(r.check_in),
            check_in_status: Punctuality::label(r.check_in_status).to_string(),
            break_out: time_cell(r.break_out),
            break_in: time_cell(r.break_in),
            break_in_status: Punctuality::label(r.break_in_status).to_string(),
            check_out: time_cell(r.check_out),
        }
    }
}

pub fn to_exports(records: &[AttendanceRecord]) -> Vec<RecordExport> {
    records.iter().map(RecordExport::from).collect()
}

/// Header for CSV / XLSX / PDF / terminal tables
pub fn get_headers() -> Vec<&'static str> {
    vec![
        "Date",
        "ID",
        "Name",
        "Shift",
        "Check-in",
        "Check-in Status",
        "Break Time Out",
        "Break Time In",
        "Break Time In Status",
        "Check Out Record",
    ]
}

/// Columns always written as text, even if they look like numbers.
pub(crate) const TEXT_COLUMNS: [usize; 3] = [1, 2, 3];

/// Columns holding an On Time / Late status.
pub const STATUS_COLUMNS: [usize; 2] = [5, 8];

pub(crate) fn record_to_row(e: &RecordExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.id.clone(),
        e.name.clone(),
        e.shift.clone(),
        e.check_in.clone(),
        e.check_in_status.clone(),
        e.break_out.clone(),
        e.break_in.clone(),
        e.break_in_status.clone(),
        e.check_out.clone(),
    ]
}

pub fn records_to_table(records: &[RecordExport]) -> Vec<Vec<String>> {
    records.iter().map(record_to_row).collect()
}
