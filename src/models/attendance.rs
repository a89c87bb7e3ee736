use super::punctuality::Punctuality;
use super::swipe::EmployeeRef;
use chrono::{NaiveDate, NaiveDateTime};

/// Final output row, one per shift instance.
///
/// Timestamps keep their full date so night-shift events remain
/// unambiguous; writers render only the time of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub employee: EmployeeRef,
    pub shift_code: String,
    pub shift: String,
    pub check_in: Option<NaiveDateTime>,
    pub check_in_status: Option<Punctuality>,
    pub break_out: Option<NaiveDateTime>,
    pub break_in: Option<NaiveDateTime>,
    pub break_in_status: Option<Punctuality>,
    pub check_out: Option<NaiveDateTime>,
}
