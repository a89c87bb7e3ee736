use super::swipe::EmployeeRef;
use chrono::{NaiveDateTime, TimeDelta};

/// A cluster of swipes treated as one physical event.
///
/// Arrival-like events (check-in, break-in) read `start`; departure-like
/// events (break-out, check-out) read `end`. There is no single
/// representative timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Burst {
    pub employee: EmployeeRef,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Number of swipes folded into this burst.
    pub swipes: usize,
}

impl Burst {
    pub fn single(employee: EmployeeRef, at: NaiveDateTime) -> Self {
        Self {
            employee,
            start: at,
            end: at,
            swipes: 1,
        }
    }

    /// Silence between the last swipe of `self` and the first swipe of `next`.
    pub fn gap_to(&self, next: &Burst) -> TimeDelta {
        next.start - self.end
    }
}
