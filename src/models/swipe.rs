use chrono::NaiveDateTime;
use serde::Serialize;

/// Canonical employee identity after the user mapping has been applied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EmployeeRef {
    pub id: String,
    pub name: String,
}

impl EmployeeRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One validated badge scan. Only successful scans of known users get this far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwipeEvent {
    pub employee: EmployeeRef,
    pub timestamp: NaiveDateTime,
}

impl SwipeEvent {
    pub fn new(employee: EmployeeRef, timestamp: NaiveDateTime) -> Self {
        Self {
            employee,
            timestamp,
        }
    }
}
