// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{STATUS_COLUMNS, TEXT_COLUMNS, get_headers, record_to_row};
use crate::export::{RecordExport, notify_export_success};
use crate::models::Punctuality;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const SHEET_NAME: &str = "Attendance";

/// XLSX export with styled header, banded rows and auto-sized columns.
pub(crate) fn export_xlsx(records: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_app_error)?;

    let headers = get_headers();
    write_header(worksheet, &headers)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, rec) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in record_to_row(rec).iter().enumerate() {
            write_xlsx_cell(worksheet, row, col, value, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    let label = if records.is_empty() {
        "XLSX (empty dataset)"
    } else {
        "XLSX"
    };
    notify_export_success(label, path);
    Ok(())
}

fn write_header(worksheet: &mut Worksheet, headers: &[&str]) -> AppResult<()> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x4472C4))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;
    Ok(())
}

/// Write one cell: dates and times become Excel serials, identity columns
/// stay text, "Late" is painted red.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: usize,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if !TEXT_COLUMNS.contains(&col)
        && let Some((num_format, serial)) = parse_to_excel_date(s)
    {
        worksheet
            .write_with_format(row, col as u16, serial, &base.set_num_format(num_format))
            .map_err(to_app_error)?;
        return Ok(());
    }

    let late = Punctuality::from_label(s).is_some_and(|p| p.is_late());
    let fmt = if STATUS_COLUMNS.contains(&col) && late {
        base.set_font_color(Color::RGB(0xC00000)).set_bold()
    } else {
        base
    };

    worksheet
        .write_with_format(row, col as u16, s, &fmt)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX: {e}"))
}
