use crate::errors::AppError;
use crate::utils::time::{SECONDS_PER_DAY, format_compact, parse_time, seconds_of_day};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A time-of-day range such as `05:30-06:35`.
///
/// Both bounds are inclusive: a swipe exactly at `start` or exactly at
/// `end` is inside the window. When `start > end` the window wraps
/// midnight (`21:30-06:35`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, t: NaiveTime) -> bool {
        if self.wraps_midnight() {
            t >= self.start || t <= self.end
        } else {
            self.start <= t && t <= self.end
        }
    }

    /// Seconds elapsed from `start` to `t`, walking forward around the clock.
    /// Orders times inside a wrapping window the way they actually happen.
    pub fn offset_of(&self, t: NaiveTime) -> i64 {
        (seconds_of_day(t) - seconds_of_day(self.start)).rem_euclid(SECONDS_PER_DAY)
    }
}

impl FromStr for TimeWindow {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start_raw, end_raw) = s
            .split_once('-')
            .ok_or_else(|| AppError::InvalidWindow(s.to_string()))?;

        let start = parse_time(start_raw).ok_or_else(|| AppError::InvalidWindow(s.to_string()))?;
        let end = parse_time(end_raw).ok_or_else(|| AppError::InvalidWindow(s.to_string()))?;

        Ok(Self { start, end })
    }
}

impl TryFrom<String> for TimeWindow {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeWindow> for String {
    fn from(w: TimeWindow) -> Self {
        w.to_string()
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_compact(self.start), format_compact(self.end))
    }
}
