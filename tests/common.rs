#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use rattendance::config::{DEFAULT_RULES, RuleConfig, ShiftConfig};
use rattendance::models::{Burst, EmployeeRef, SwipeEvent};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Unique path inside the system temp dir; any leftover file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write the bundled rule file to a temp path and return it.
pub fn write_default_rules(name: &str) -> String {
    let p = temp_path(&format!("{name}_rules"), "yaml");
    fs::write(&p, DEFAULT_RULES).expect("write rules");
    p
}

/// Write a swipe log CSV (ID, Name, Date, Time, Type, Status) and return its path.
pub fn write_swipe_log(name: &str, rows: &[(&str, &str, &str, &str)]) -> String {
    let p = temp_path(&format!("{name}_log"), "csv");
    let mut content = String::from("ID,Name,Date,Time,Type,Status\n");
    for (name, date, time, status) in rows {
        content.push_str(&format!("1,{name},{date},{time},FACE,{status}\n"));
    }
    fs::write(&p, content).expect("write swipe log");
    p
}

pub fn default_rules() -> RuleConfig {
    RuleConfig::from_yaml_str(DEFAULT_RULES).expect("default rules are valid")
}

/// Default rules with every shift switched to `policy`.
pub fn rules_with_policy(policy: &str) -> RuleConfig {
    let yaml = DEFAULT_RULES.replace(
        "gap_policy: nearest_checkpoint",
        &format!("gap_policy: {policy}"),
    );
    RuleConfig::from_yaml_str(&yaml).expect("rules with policy are valid")
}

pub fn shift(cfg: &RuleConfig, code: &str) -> ShiftConfig {
    cfg.shift(code).cloned().expect("shift exists")
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid timestamp")
}

pub fn emp() -> EmployeeRef {
    EmployeeRef::new("TPL0001", "Bui Duc Toan")
}

pub fn swipes_at(stamps: &[&str]) -> Vec<SwipeEvent> {
    stamps.iter().map(|s| SwipeEvent::new(emp(), ts(s))).collect()
}

pub fn burst(start: &str, end: &str) -> Burst {
    let mut b = Burst::single(emp(), ts(start));
    b.end = ts(end);
    b
}

pub fn at(s: &str) -> Burst {
    Burst::single(emp(), ts(s))
}
