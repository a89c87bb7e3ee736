// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::resolve_output;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::to_exports;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::AttendanceRecord;
use crate::ui::messages::warning;
use crate::utils::date::format_date;
use std::path::{Path, PathBuf};

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` to `path` in the requested format.
    ///
    /// Returns the path actually written, which differs from `path` when the
    /// file already existed and `force` was not given.
    pub fn export(
        records: &[AttendanceRecord],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<PathBuf> {
        let target = resolve_output(path, force)?;

        if records.is_empty() {
            warning("No attendance records produced: writing headers only.");
        }

        let rows = to_exports(records);

        match format {
            ExportFormat::Xlsx => export_xlsx(&rows, &target)?,
            ExportFormat::Csv => export_csv(&rows, &target)?,
            ExportFormat::Json => export_json(&rows, &target)?,
            ExportFormat::Pdf => export_pdf(&rows, &target, &build_pdf_title(records))?,
        }

        Ok(target)
    }
}

/// PDF title with the covered date range.
fn build_pdf_title(records: &[AttendanceRecord]) -> String {
    let first = records.iter().map(|r| r.date).min();
    let last = records.iter().map(|r| r.date).max();

    match (first, last) {
        (Some(a), Some(b)) if a == b => format!("Attendance report - {}", format_date(a)),
        (Some(a), Some(b)) => format!(
            "Attendance report - {} to {}",
            format_date(a),
            format_date(b)
        ),
        _ => "Attendance report".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::build_pdf_title;
    use crate::models::{AttendanceRecord, EmployeeRef};
    use chrono::NaiveDate;

    fn rec(d: u32) -> AttendanceRecord {
        AttendanceRecord {
            date: NaiveDate::from_ymd_opt(2025, 3, d).unwrap(),
            employee: EmployeeRef::new("E1", "Ann"),
            shift_code: "A".into(),
            shift: "Morning".into(),
            check_in: None,
            check_in_status: None,
            break_out: None,
            break_in: None,
            break_in_status: None,
            check_out: None,
        }
    }

    #[test]
    fn title_reflects_date_range() {
        assert_eq!(build_pdf_title(&[]), "Attendance report");
        assert_eq!(
            build_pdf_title(&[rec(2)]),
            "Attendance report - 2025-03-02"
        );
        assert_eq!(
            build_pdf_title(&[rec(4), rec(2)]),
            "Attendance report - 2025-03-02 to 2025-03-04"
        );
    }
}
