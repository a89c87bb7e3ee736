mod common;
use chrono::NaiveTime;
use common::{default_rules, temp_path};
use rattendance::config::{DEFAULT_RULES, GapPolicy, RuleConfig};
use rattendance::errors::AppError;
use rattendance::models::TimeWindow;
use std::fs;
use std::path::Path;

fn hm(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

fn config_error(yaml: &str) -> String {
    match RuleConfig::from_yaml_str(yaml) {
        Err(AppError::Config(msg)) => msg,
        Err(other) => panic!("expected a configuration error, got {other}"),
        Ok(_) => panic!("configuration unexpectedly accepted"),
    }
}

#[test]
fn bundled_rules_load() {
    let cfg = default_rules();

    assert_eq!(cfg.burst_threshold_minutes, 2);
    assert_eq!(cfg.status_filter, "Success");
    assert_eq!(cfg.shifts.keys().collect::<Vec<_>>(), vec!["A", "B", "C"]);

    let a = cfg.shift("A").expect("shift A");
    assert_eq!(a.code, "A");
    assert_eq!(a.display_name, "Morning");
    assert_eq!(a.check_in_window, TimeWindow::new(hm("05:30"), hm("06:35")));
    assert_eq!(a.gap_policy, GapPolicy::NearestCheckpoint);
    assert_eq!(a.break_out_checkpoint, Some(hm("10:00")));
    assert_eq!(a.break_in_cutoff(), NaiveTime::from_hms_opt(10, 34, 59).expect("valid"));

    let user = cfg.users.get("Silver_Bui").expect("mapped user");
    assert_eq!(user.output_id, "TPL0001");
}

#[test]
fn matching_shift_uses_code_order() {
    let cfg = default_rules();

    assert_eq!(cfg.matching_shift(hm("06:00")).map(|s| s.code.as_str()), Some("A"));
    assert_eq!(cfg.matching_shift(hm("22:00")).map(|s| s.code.as_str()), Some("C"));
    assert!(cfg.matching_shift(hm("03:00")).is_none());
}

#[test]
fn printed_rules_load_back() {
    let yaml = default_rules().to_yaml().expect("serialize");
    let again = RuleConfig::from_yaml_str(&yaml).expect("reload");

    assert_eq!(again.shifts.len(), 3);
    assert_eq!(again.shift("C").map(|c| c.crosses_midnight()), Some(true));
}

#[test]
fn gap_policy_defaults_to_first() {
    let yaml = DEFAULT_RULES
        .replace("    gap_policy: nearest_checkpoint\n", "")
        .replace("    # first | nearest_checkpoint | nearest_break_end\n", "");
    let cfg = RuleConfig::from_yaml_str(&yaml).expect("valid rules");

    assert!(cfg.shifts.values().all(|s| s.gap_policy == GapPolicy::First));
}

#[test]
fn missing_field_is_a_parse_error() {
    let yaml = DEFAULT_RULES.replacen("    shift_start: \"06:00\"\n", "", 1);

    match RuleConfig::from_yaml_str(&yaml) {
        Err(AppError::Yaml(e)) => assert!(e.to_string().contains("shift_start")),
        Err(other) => panic!("expected a YAML error, got {other}"),
        Ok(_) => panic!("missing shift_start accepted"),
    }
}

#[test]
fn midpoint_outside_search_window_is_rejected() {
    let yaml = DEFAULT_RULES.replacen("break_midpoint: \"10:15\"", "break_midpoint: \"11:00\"", 1);
    assert!(config_error(&yaml).contains("break_midpoint"));
}

#[test]
fn checkpoint_policy_needs_a_checkpoint() {
    let yaml = DEFAULT_RULES.replacen("    break_out_checkpoint: \"10:00\"\n", "", 1);
    assert!(config_error(&yaml).contains("break_out_checkpoint"));

    let yaml = DEFAULT_RULES.replacen(
        "break_out_checkpoint: \"10:00\"",
        "break_out_checkpoint: \"12:00\"",
        1,
    );
    assert!(config_error(&yaml).contains("outside"));
}

#[test]
fn zero_minimum_gap_is_rejected() {
    let yaml = DEFAULT_RULES.replacen(
        "minimum_break_gap_minutes: 5",
        "minimum_break_gap_minutes: 0",
        1,
    );
    assert!(config_error(&yaml).contains("minimum_break_gap_minutes"));
}

#[test]
fn empty_shift_catalogue_is_rejected() {
    let msg = config_error("burst_threshold_minutes: 2\nshifts: {}\n");
    assert!(msg.contains("at least one shift"));
}

#[test]
fn malformed_window_is_rejected() {
    let yaml = DEFAULT_RULES.replacen("\"05:30-06:35\"", "\"05:30 to 06:35\"", 1);
    assert!(RuleConfig::from_yaml_str(&yaml).is_err());

    assert!("21:30-06:35".parse::<TimeWindow>().is_ok());
    assert!("21:30".parse::<TimeWindow>().is_err());
    assert!("25:00-06:00".parse::<TimeWindow>().is_err());
}

#[test]
fn windows_include_both_bounds_and_may_wrap() {
    let day: TimeWindow = "05:30-06:35".parse().expect("window");
    assert!(day.contains(hm("05:30")));
    assert!(day.contains(hm("06:35")));
    assert!(!day.contains(hm("06:36")));

    let night: TimeWindow = "21:30-06:35".parse().expect("window");
    assert!(night.wraps_midnight());
    assert!(night.contains(hm("23:00")));
    assert!(night.contains(hm("00:00")));
    assert!(!night.contains(hm("12:00")));
    assert!(night.offset_of(hm("00:00")) > night.offset_of(hm("23:00")));
    assert_eq!(night.to_string(), "21:30-06:35");
}

#[test]
fn missing_file_is_reported() {
    let p = temp_path("config_missing", "yaml");
    assert!(matches!(
        RuleConfig::load(Path::new(&p)),
        Err(AppError::ConfigNotFound(_))
    ));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let p = temp_path("config_init", "yaml");
    let path = Path::new(&p);

    RuleConfig::init_default(path, false).expect("first init");
    assert!(RuleConfig::load(path).is_ok());

    fs::write(path, "# edited\n").expect("overwrite");
    assert!(RuleConfig::init_default(path, false).is_err());
    assert_eq!(fs::read_to_string(path).expect("read"), "# edited\n");

    RuleConfig::init_default(path, true).expect("forced init");
    assert_eq!(fs::read_to_string(path).expect("read"), DEFAULT_RULES);
}
