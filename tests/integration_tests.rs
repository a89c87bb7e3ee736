use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rat, temp_path, write_default_rules, write_swipe_log};

fn day_log(name: &str) -> String {
    write_swipe_log(
        name,
        &[
            ("Silver_Bui", "2025-11-03", "06:00:00", "Success"),
            ("Silver_Bui", "2025-11-03", "06:00:40", "Success"),
            ("Silver_Bui", "2025-11-03", "10:20:00", "Success"),
            ("Silver_Bui", "2025-11-03", "10:29:00", "Success"),
            ("Silver_Bui", "2025-11-03", "14:00:00", "Success"),
            ("Silver_Bui", "2025-11-04", "06:09:00", "Success"),
            ("Silver_Bui", "2025-11-04", "07:00:00", "Failed"),
            ("Visitor", "2025-11-04", "06:00:00", "Success"),
        ],
    )
}

#[test]
fn test_init_writes_rules_once() {
    let cfg = temp_path("cli_init", "yaml");

    rat()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Rule file written"));

    assert!(fs::read_to_string(&cfg).expect("rules").contains("shifts:"));

    rat()
        .args(["--config", &cfg, "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rat()
        .args(["--config", &cfg, "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_check_and_print() {
    let cfg = write_default_rules("cli_config");

    rat()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Rule file is valid: 3 shifts, 1 users"))
        .stdout(contains("crosses midnight"));

    rat()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("display_name: Morning"))
        .stdout(contains("gap_policy: nearest_checkpoint"));
}

#[test]
fn test_config_missing_file_fails() {
    let cfg = temp_path("cli_config_missing", "yaml");

    rat()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .failure()
        .stderr(contains("Configuration file not found"));
}

#[test]
fn test_process_writes_csv_report() {
    let cfg = write_default_rules("cli_process_csv");
    let log = day_log("cli_process_csv");
    let out = temp_path("cli_process_csv_report", "csv");

    rat()
        .args(["--config", &cfg, "process", &log, &out])
        .assert()
        .success()
        .stdout(contains("Filtered by status"))
        .stdout(contains("Shift instances"))
        .stdout(contains("2 attendance records written"));

    let content = fs::read_to_string(&out).expect("read report");
    assert!(content.contains(
        "2025-11-03,TPL0001,Bui Duc Toan,Morning,06:00:00,On Time,10:20:00,10:29:00,On Time,14:00:00"
    ));
    assert!(content.contains("2025-11-04,TPL0001,Bui Duc Toan,Morning,06:09:00,Late"));
    assert!(!content.contains("Visitor"));
}

#[test]
fn test_process_print_shows_table() {
    let cfg = write_default_rules("cli_process_print");
    let log = day_log("cli_process_print");
    let out = temp_path("cli_process_print_report", "xlsx");

    rat()
        .args(["--config", &cfg, "process", &log, &out, "--print"])
        .assert()
        .success()
        .stdout(contains("Check Out Record"))
        .stdout(contains("Bui Duc Toan").and(contains("Late")));

    assert!(fs::metadata(&out).is_ok());
}

#[test]
fn test_process_format_flag_overrides_extension() {
    let cfg = write_default_rules("cli_process_format");
    let log = day_log("cli_process_format");
    let out = temp_path("cli_process_format_report", "dat");

    rat()
        .args(["--config", &cfg, "process", &log, &out, "--format", "json"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read report");
    assert!(content.trim_start().starts_with('['));
    assert!(content.contains("\"Check-in Status\": \"On Time\""));
}

#[test]
fn test_process_rejects_log_without_status_column() {
    let cfg = write_default_rules("cli_process_columns");
    let log = temp_path("cli_process_columns_log", "csv");
    fs::write(&log, "ID,Name,Date,Time\n1,Silver_Bui,2025-11-03,06:00:00\n").expect("write log");
    let out = temp_path("cli_process_columns_report", "csv");

    rat()
        .args(["--config", &cfg, "process", &log, &out])
        .assert()
        .failure()
        .stderr(contains("Missing required columns: Status"));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_process_rejects_bad_timestamp() {
    let cfg = write_default_rules("cli_process_badts");
    let log = write_swipe_log(
        "cli_process_badts",
        &[("Silver_Bui", "2025-13-45", "06:00:00", "Success")],
    );
    let out = temp_path("cli_process_badts_report", "csv");

    rat()
        .args(["--config", &cfg, "process", &log, &out])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp at row 2"));
}

#[test]
fn test_convert_extracts_columns() {
    let input = temp_path("cli_convert_in", "csv");
    fs::write(
        &input,
        "No,Person,Day,Clock,Kind,Device,Result\n\
         1,Silver_Bui,2025-11-03,06:00:00,FACE,Door 1,Success\n\
         1,Silver_Bui,2025-11-03,14:00:00,FACE,Door 1,Success\n",
    )
    .expect("write input");
    let output = temp_path("cli_convert_out", "xlsx");

    rat()
        .args(["convert", &input, &output])
        .assert()
        .success()
        .stdout(contains("2 rows converted"));

    let bytes = fs::read(&output).expect("read xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_convert_rejects_narrow_csv_and_wrong_extension() {
    let input = temp_path("cli_convert_narrow", "csv");
    fs::write(&input, "ID,Name,Date\n1,Silver_Bui,2025-11-03\n").expect("write input");

    rat()
        .args(["convert", &input, &temp_path("cli_convert_narrow_out", "xlsx")])
        .assert()
        .failure()
        .stderr(contains("at least 7 are required"));

    rat()
        .args(["convert", &input, &temp_path("cli_convert_wrong", "csv")])
        .assert()
        .failure()
        .stderr(contains(".xlsx"));
}

#[test]
fn test_process_reads_converted_workbook() {
    let cfg = write_default_rules("cli_roundtrip");
    let raw = temp_path("cli_roundtrip_raw", "csv");
    fs::write(
        &raw,
        "No,Person,Day,Clock,Kind,Device,Result\n\
         1,Silver_Bui,2025-11-03,06:00:00,FACE,Door 1,Success\n\
         1,Silver_Bui,2025-11-03,10:20:00,FACE,Door 1,Success\n\
         1,Silver_Bui,2025-11-03,10:29:00,FACE,Door 1,Success\n\
         1,Silver_Bui,2025-11-03,14:00:00,FACE,Door 1,Success\n\
         1,Silver_Bui,2025-11-03,15:00:00,FACE,Door 1,Failed\n",
    )
    .expect("write raw log");
    let log = temp_path("cli_roundtrip_log", "xlsx");
    let out = temp_path("cli_roundtrip_report", "csv");

    rat()
        .args(["convert", &raw, &log])
        .assert()
        .success()
        .stdout(contains("5 rows converted"));

    rat()
        .args(["--config", &cfg, "process", &log, &out])
        .assert()
        .success()
        .stdout(contains("1 attendance records written"));

    let content = fs::read_to_string(&out).expect("read report");
    assert!(content.contains(
        "2025-11-03,TPL0001,Bui Duc Toan,Morning,06:00:00,On Time,10:20:00,10:29:00,On Time,14:00:00"
    ));
}
