/// Rule file written by `rattendance init`.
pub const DEFAULT_RULES: &str = r#"# rAttendance rule file
#
# Times are HH:MM or HH:MM:SS, windows are "start-end" and include both
# bounds. A window whose start is later than its end wraps midnight.

# Swipes of the same employee at most this many minutes apart are one burst.
burst_threshold_minutes: 2

# Only rows with this Status are processed.
status_filter: Success

# Raw badge name -> name and ID printed in the report.
# Swipes from names not listed here are ignored.
users:
  Silver_Bui:
    output_name: Bui Duc Toan
    output_id: TPL0001

shifts:
  A:
    display_name: Morning
    check_in_window: "05:30-06:35"
    check_out_window: "13:30-14:35"
    break_search_window: "09:50-10:35"
    break_midpoint: "10:15"
    minimum_break_gap_minutes: 5
    shift_start: "06:00"
    grace_period_seconds: 299
    break_end: "10:30"
    break_grace_period_seconds: 299
    # first | nearest_checkpoint | nearest_break_end
    gap_policy: nearest_checkpoint
    break_out_checkpoint: "10:00"
  B:
    display_name: Afternoon
    check_in_window: "13:30-14:35"
    check_out_window: "21:30-22:35"
    break_search_window: "17:50-18:35"
    break_midpoint: "18:15"
    minimum_break_gap_minutes: 5
    shift_start: "14:00"
    grace_period_seconds: 299
    break_end: "18:30"
    break_grace_period_seconds: 299
    gap_policy: nearest_checkpoint
    break_out_checkpoint: "18:00"
  C:
    display_name: Night
    check_in_window: "21:30-22:35"
    check_out_window: "05:30-06:35"
    break_search_window: "01:50-02:50"
    break_midpoint: "02:15"
    minimum_break_gap_minutes: 5
    shift_start: "22:00"
    grace_period_seconds: 299
    break_end: "02:45"
    break_grace_period_seconds: 299
    gap_policy: nearest_checkpoint
    break_out_checkpoint: "02:00"
"#;
