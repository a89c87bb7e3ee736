use crate::config::RuleConfig;
use crate::core::logic::{Attendance, Core};
use crate::errors::AppResult;
use crate::export::{
    ExportFormat, ExportLogic, STATUS_COLUMNS, get_headers, records_to_table, to_exports,
};
use crate::input::{ValidationReport, read_swipe_log, validate_swipes};
use crate::models::AttendanceRecord;
use crate::ui::messages::{header, info, stage, success, warning};
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::table::Table;
use std::path::{Path, PathBuf};

/// Everything `process` produced, for callers that want more than the file.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub written: PathBuf,
    pub validation: ValidationReport,
    pub attendance: Attendance,
}

/// Options of one `process` run.
pub struct ProcessRequest<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub format: Option<ExportFormat>,
    pub force: bool,
    pub print: bool,
}

pub struct ProcessLogic;

impl ProcessLogic {
    /// Read the swipe log, run the attendance pipeline and export the result.
    pub fn run(cfg: &RuleConfig, req: &ProcessRequest) -> AppResult<ProcessOutcome> {
        info(format!("Reading swipe log: {}", req.input.display()));

        let rows = read_swipe_log(req.input)?;
        let (swipes, validation) = validate_swipes(&rows, cfg)?;

        stage("Loaded rows", validation.loaded);
        stage(
            "Filtered by status",
            format!("{} (kept '{}')", validation.rejected_status, cfg.status_filter),
        );
        stage("Filtered by user", validation.rejected_user);
        stage("Valid swipes", validation.accepted);

        if swipes.is_empty() {
            warning("No valid records to process after filtering.");
        }

        let attendance = Core::build_attendance(&swipes, cfg)?;
        let stats = attendance.stats;

        stage(
            "Bursts",
            format!("{} across {} employees", stats.bursts, stats.employees),
        );
        stage("Orphan bursts", stats.orphan_bursts);
        stage("Shift instances", stats.instances);

        let format = req
            .format
            .unwrap_or_else(|| ExportFormat::from_path(req.output));

        let written = ExportLogic::export(&attendance.records, format, req.output, req.force)?;

        if req.print {
            print_records(&attendance.records);
        }

        success(format!(
            "{} attendance records written to {}",
            attendance.records.len(),
            written.display()
        ));

        Ok(ProcessOutcome {
            written,
            validation,
            attendance,
        })
    }
}

/// Status columns painted green/red, empty cells greyed out.
pub fn render_records(records: &[AttendanceRecord]) -> String {
    let mut table = Table::new(get_headers());
    for row in records_to_table(&to_exports(records)) {
        let painted = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                if STATUS_COLUMNS.contains(&i) {
                    colorize_status(cell)
                } else {
                    colorize_optional(cell)
                }
            })
            .collect();
        table.add_row(painted);
    }

    table.render()
}

fn print_records(records: &[AttendanceRecord]) {
    println!();
    header("Attendance");

    if records.is_empty() {
        warning("No attendance records.");
        return;
    }

    print!("{}", render_records(records));
    println!();
}
