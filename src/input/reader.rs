use crate::errors::{AppError, AppResult};
use crate::utils::date::from_excel_serial;
use calamine::{Data, Reader, open_workbook_auto};
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;

/// Columns every swipe log must carry. Others (e.g. `Type`) are ignored.
pub(crate) const REQUIRED_COLUMNS: [&str; 5] = ["ID", "Name", "Date", "Time", "Status"];

const DATE_SLOT: usize = 2;
const TIME_SLOT: usize = 3;

/// Extensions read as workbooks; anything else goes through the CSV reader.
const WORKBOOK_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

/// One untyped row of the swipe log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSwipe {
    /// 1-based line in the source file, header included.
    pub line: usize,
    pub id: String,
    pub name: String,
    pub date: String,
    pub time: String,
    pub status: String,
}

impl RawSwipe {
    fn from_fields(line: usize, field: impl Fn(usize) -> String) -> Self {
        Self {
            line,
            id: field(0),
            name: field(1),
            date: field(DATE_SLOT),
            time: field(TIME_SLOT),
            status: field(4),
        }
    }
}

/// Read a swipe log, picking the reader from the file extension.
pub fn read_swipe_log(path: &Path) -> AppResult<Vec<RawSwipe>> {
    let is_workbook = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|w| w.eq_ignore_ascii_case(ext))
        });

    if is_workbook {
        return read_swipe_workbook(path);
    }

    let file = std::fs::File::open(path)?;
    read_swipe_records(file)
}

pub fn read_swipe_records<R: Read>(input: R) -> AppResult<Vec<RawSwipe>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let idx = column_indices(&headers)?;

    let mut rows = Vec::new();
    for (n, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let line = rec
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(n + 2);

        rows.push(RawSwipe::from_fields(line, |slot| {
            rec.get(idx[slot]).unwrap_or("").to_string()
        }));
    }

    Ok(rows)
}

/// First worksheet of an Excel/ODS workbook, header on its first used row.
///
/// Date and time cells stored as Excel serials come back as
/// `YYYY-MM-DD` and `HH:MM:SS`; text cells are taken as written.
pub fn read_swipe_workbook(path: &Path) -> AppResult<Vec<RawSwipe>> {
    if !path.exists() {
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("input file not found: {}", path.display()),
        )));
    }

    let mut workbook = open_workbook_auto(path).map_err(to_app_error)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Spreadsheet("workbook has no worksheet".into()))?
        .map_err(to_app_error)?;

    let first_line = range.start().map(|(r, _)| r as usize + 1).unwrap_or(1);
    let mut sheet_rows = range.rows();

    let headers: Vec<String> = sheet_rows
        .next()
        .map(|cells| cells.iter().map(|c| cell_text(c, None)).collect())
        .unwrap_or_default();
    let idx = column_indices(&headers)?;

    let mut rows = Vec::new();
    for (n, cells) in sheet_rows.enumerate() {
        if cells.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }

        let line = first_line + n + 1;
        rows.push(RawSwipe::from_fields(line, |slot| {
            cells
                .get(idx[slot])
                .map(|c| cell_text(c, Some(slot)))
                .unwrap_or_default()
        }));
    }

    Ok(rows)
}

/// Render one cell as the text the CSV reader would have produced.
fn cell_text(cell: &Data, slot: Option<usize>) -> String {
    let serial = match cell {
        Data::DateTime(dt) => Some(dt.as_f64()),
        Data::Float(f) if matches!(slot, Some(DATE_SLOT | TIME_SLOT)) => Some(*f),
        _ => None,
    };

    if let Some(dt) = serial.and_then(from_excel_serial) {
        return match slot {
            Some(TIME_SLOT) => dt.format("%H:%M:%S").to_string(),
            Some(DATE_SLOT) => dt.format("%Y-%m-%d").to_string(),
            _ => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        };
    }

    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::DateTimeIso(s) => s.trim().replacen('T', " ", 1),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string().trim().to_string(),
    }
}

/// Position of each required column, matched case-insensitively.
fn column_indices(headers: &[String]) -> AppResult<[usize; 5]> {
    let mut out = [0usize; 5];
    let mut missing = Vec::new();

    for (slot, wanted) in REQUIRED_COLUMNS.iter().enumerate() {
        match headers
            .iter()
            .position(|h| h.trim().trim_start_matches('\u{feff}').eq_ignore_ascii_case(wanted))
        {
            Some(i) => out[slot] = i,
            None => missing.push(*wanted),
        }
    }

    if !missing.is_empty() {
        return Err(AppError::MissingColumns(missing.join(", ")));
    }

    Ok(out)
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Spreadsheet(e.to_string())
}
