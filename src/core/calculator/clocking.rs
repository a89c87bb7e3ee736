//! Check-in / check-out extraction.

use crate::config::ShiftConfig;
use crate::models::Burst;
use chrono::NaiveDateTime;

/// `start` of the earliest-starting burst whose start lies in the check-in window.
pub fn find_check_in(bursts: &[Burst], shift: &ShiftConfig) -> Option<NaiveDateTime> {
    bursts
        .iter()
        .map(|b| b.start)
        .filter(|start| shift.check_in_window.contains(start.time()))
        .min()
}

/// `end` of the latest-ending burst whose end lies in the check-out window.
pub fn find_check_out(bursts: &[Burst], shift: &ShiftConfig) -> Option<NaiveDateTime> {
    bursts
        .iter()
        .map(|b| b.end)
        .filter(|end| shift.check_out_window.contains(end.time()))
        .max()
}
