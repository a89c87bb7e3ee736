mod common;
use common::{default_rules, temp_path, ts, write_swipe_log};
use rattendance::errors::AppError;
use rattendance::input::{read_swipe_log, read_swipe_records, validate_swipes};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::Path;

#[test]
fn headers_are_matched_case_insensitively_and_extra_columns_ignored() {
    let csv = "\u{feff}id , NAME,date,Time,Type,status\n7,Silver_Bui,2025-11-03,06:00:00,FACE,Success\n";
    let rows = read_swipe_records(csv.as_bytes()).expect("read");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].line, 2);
    assert_eq!(rows[0].id, "7");
    assert_eq!(rows[0].name, "Silver_Bui");
    assert_eq!(rows[0].status, "Success");
}

#[test]
fn missing_columns_are_named() {
    let csv = "ID,Name,Date\n1,Silver_Bui,2025-11-03\n";

    match read_swipe_records(csv.as_bytes()) {
        Err(AppError::MissingColumns(cols)) => assert_eq!(cols, "Time, Status"),
        other => panic!("expected missing columns, got {other:?}"),
    }
}

#[test]
fn filters_status_and_unknown_users() {
    let cfg = default_rules();
    let csv = "\
ID,Name,Date,Time,Status
1,Silver_Bui,2025-11-03,06:00:00,Success
1,Silver_Bui,2025-11-03,06:00:30,Failed
2,Stranger,2025-11-03,06:01:00,Success
1,Silver_Bui,2025.11.03,14:00, Success
";
    let rows = read_swipe_records(csv.as_bytes()).expect("read");
    let (swipes, report) = validate_swipes(&rows, &cfg).expect("validate");

    assert_eq!(report.loaded, 4);
    assert_eq!(report.rejected_status, 1);
    assert_eq!(report.rejected_user, 1);
    assert_eq!(report.accepted, 2);

    assert_eq!(swipes[0].employee.id, "TPL0001");
    assert_eq!(swipes[0].employee.name, "Bui Duc Toan");
    assert_eq!(swipes[1].timestamp, ts("2025-11-03 14:00:00"));
}

#[test]
fn accepted_date_layouts() {
    let cfg = default_rules();
    let csv = "\
ID,Name,Date,Time,Status
1,Silver_Bui,2025/11/03,06:00:00,Success
1,Silver_Bui,03/11/2025,06:01:00,Success
1,Silver_Bui,2025-11-03 00:00:00,06:02:00,Success
";
    let rows = read_swipe_records(csv.as_bytes()).expect("read");
    let (swipes, _) = validate_swipes(&rows, &cfg).expect("validate");

    assert!(swipes.iter().all(|s| s.timestamp.date() == ts("2025-11-03 00:00:00").date()));
}

#[test]
fn bad_timestamp_on_kept_row_is_fatal() {
    let cfg = default_rules();
    let csv = "\
ID,Name,Date,Time,Status
1,Silver_Bui,2025-11-03,06:00:00,Success
1,Silver_Bui,2025-11-03,6 o'clock,Success
";
    let rows = read_swipe_records(csv.as_bytes()).expect("read");

    match validate_swipes(&rows, &cfg) {
        Err(AppError::InvalidTimestamp { row, employee, .. }) => {
            assert_eq!(row, 3);
            assert_eq!(employee, "Silver_Bui");
        }
        other => panic!("expected invalid timestamp, got {other:?}"),
    }
}

#[test]
fn bad_timestamp_on_filtered_row_is_ignored() {
    let cfg = default_rules();
    let csv = "\
ID,Name,Date,Time,Status
2,Stranger,garbage,garbage,Success
1,Silver_Bui,garbage,garbage,Failed
";
    let rows = read_swipe_records(csv.as_bytes()).expect("read");
    let (swipes, report) = validate_swipes(&rows, &cfg).expect("validate");

    assert!(swipes.is_empty());
    assert_eq!(report.rejected_user + report.rejected_status, 2);
}

#[test]
fn reads_from_file() {
    let p = write_swipe_log(
        "input_reads_from_file",
        &[("Silver_Bui", "2025-11-03", "06:00:00", "Success")],
    );
    let rows = read_swipe_log(Path::new(&p)).expect("read");
    assert_eq!(rows.len(), 1);
}

#[test]
fn status_match_is_exact() {
    let cfg = default_rules();
    let csv = "\
ID,Name,Date,Time,Status
1,Silver_Bui,2025-11-03,06:00:00,Success
1,Silver_Bui,2025-11-03,06:10:00,success
1,Silver_Bui,2025-11-03,06:20:00,SUCCESS
";
    let rows = read_swipe_records(csv.as_bytes()).expect("read");
    let (swipes, report) = validate_swipes(&rows, &cfg).expect("validate");

    assert_eq!(report.rejected_status, 2);
    assert_eq!(swipes.len(), 1);
    assert_eq!(swipes[0].timestamp, ts("2025-11-03 06:00:00"));
}

#[test]
fn reads_xlsx_with_serial_and_text_cells() {
    let p = temp_path("input_reads_xlsx", "xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let date_fmt = Format::new().set_num_format("yyyy-mm-dd");
    let time_fmt = Format::new().set_num_format("hh:mm:ss");

    for (col, h) in ["ID", "Name", "Date", "Time", "Type", "Status"].iter().enumerate() {
        sheet.write(0, col as u16, *h).expect("header");
    }

    sheet.write_number(1, 0, 1).expect("id");
    sheet.write(1, 1, "Silver_Bui").expect("name");
    let day = ExcelDateTime::from_ymd(2025, 11, 3).expect("date");
    let clock = ExcelDateTime::from_hms(6, 0, 40).expect("time");
    sheet.write_datetime_with_format(1, 2, &day, &date_fmt).expect("date cell");
    sheet.write_datetime_with_format(1, 3, &clock, &time_fmt).expect("time cell");
    sheet.write(1, 4, "FACE").expect("type");
    sheet.write(1, 5, "Success").expect("status");

    for (col, v) in ["1", "Silver_Bui", "2025-11-03", "14:00:00", "FACE", "Success"]
        .iter()
        .enumerate()
    {
        sheet.write(2, col as u16, *v).expect("text row");
    }

    workbook.save(&p).expect("save workbook");

    let rows = read_swipe_log(Path::new(&p)).expect("read workbook");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].line, 2);
    assert_eq!(rows[0].id, "1");
    assert_eq!(rows[0].date, "2025-11-03");
    assert_eq!(rows[0].time, "06:00:40");
    assert_eq!(rows[1].time, "14:00:00");

    let (swipes, _) = validate_swipes(&rows, &default_rules()).expect("validate");
    assert_eq!(swipes[0].timestamp, ts("2025-11-03 06:00:40"));
    assert_eq!(swipes[1].timestamp, ts("2025-11-03 14:00:00"));
}

#[test]
fn workbook_without_status_column_is_rejected() {
    let p = temp_path("input_xlsx_no_status", "xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, h) in ["ID", "Name", "Date", "Time"].iter().enumerate() {
        sheet.write(0, col as u16, *h).expect("header");
    }
    workbook.save(&p).expect("save workbook");

    match read_swipe_log(Path::new(&p)) {
        Err(AppError::MissingColumns(cols)) => assert_eq!(cols, "Status"),
        other => panic!("expected missing columns, got {other:?}"),
    }
}
