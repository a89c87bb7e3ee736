use super::burst::Burst;
use super::swipe::EmployeeRef;
use chrono::NaiveDate;

/// One concrete occurrence of a shift for one employee.
///
/// `shift_date` is the calendar date of the triggering check-in burst,
/// even when most member bursts fall on the following day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftInstance {
    pub employee: EmployeeRef,
    pub shift_code: String,
    pub shift_date: NaiveDate,
    pub bursts: Vec<Burst>,
}

impl ShiftInstance {
    pub fn trigger(&self) -> Option<&Burst> {
        self.bursts.first()
    }
}
