//! Raw device CSV → tidy XLSX, keeping only the columns the attendance
//! pipeline cares about.

use crate::errors::{AppError, AppResult};
use crate::utils::path::has_extension;
use rust_xlsxwriter::{Color, Format, FormatPattern, Workbook};
use std::fs::File;
use std::path::Path;

/// Source columns (0-based) copied to the workbook, in order.
pub const COLUMN_INDICES: [usize; 6] = [0, 1, 2, 3, 4, 6];

/// Headers written in place of the source ones.
pub const COLUMN_NAMES: [&str; 6] = ["ID", "Name", "Date", "Time", "Type", "Status"];

const SHEET_NAME: &str = "Data";
const COLUMN_WIDTH: f64 = 15.0;

fn validate_paths(input: &Path, output: &Path) -> AppResult<()> {
    if !input.exists() {
        return Err(AppError::Convert(format!(
            "input file not found: {}",
            input.display()
        )));
    }

    if !has_extension(input, "csv") {
        return Err(AppError::Convert(format!(
            "input file must be a .csv file: {}",
            input.display()
        )));
    }

    if !has_extension(output, "xlsx") {
        return Err(AppError::Convert(format!(
            "output file must be a .xlsx file: {}",
            output.display()
        )));
    }

    if let Some(dir) = output.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        return Err(AppError::Convert(format!(
            "output directory does not exist: {}",
            dir.display()
        )));
    }

    Ok(())
}

/// Copy columns [`COLUMN_INDICES`] of every data row into sheet "Data".
///
/// The first CSV row is the device header and is replaced by
/// [`COLUMN_NAMES`]. Returns the number of data rows written.
pub fn convert_csv_to_xlsx(input: &Path, output: &Path) -> AppResult<usize> {
    validate_paths(input, output)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(File::open(input)?);

    let mut records = reader.records();

    let first = match records.next() {
        Some(row) => row?,
        None => return Err(AppError::Convert("CSV file is empty".into())),
    };

    let needed = COLUMN_INDICES.iter().max().copied().unwrap_or(0) + 1;
    if first.len() < needed {
        return Err(AppError::Convert(format!(
            "CSV has only {} columns, at least {} are required",
            first.len(),
            needed
        )));
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).map_err(to_app_error)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x4472C4))
        .set_pattern(FormatPattern::Solid);

    for (col, name) in COLUMN_NAMES.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *name, &header_format)
            .map_err(to_app_error)?;
        sheet
            .set_column_width(col as u16, COLUMN_WIDTH)
            .map_err(to_app_error)?;
    }

    let mut written = 0usize;
    for row in records {
        let row = row?;
        let out_row = (written + 1) as u32;

        for (col, src) in COLUMN_INDICES.iter().enumerate() {
            let value = row.get(*src).unwrap_or("").trim();
            if !value.is_empty() {
                sheet
                    .write(out_row, col as u16, value)
                    .map_err(to_app_error)?;
            }
        }

        written += 1;
    }

    workbook.save(output).map_err(to_app_error)?;
    Ok(written)
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Convert(format!("XLSX: {e}"))
}
