//! On Time / Late derivation.

use crate::config::ShiftConfig;
use crate::models::Punctuality;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// `Late` when `observed` is strictly after `reference_date + period_start + grace`,
/// `On Time` otherwise, `None` when nothing was observed.
pub fn derive_status(
    observed: Option<NaiveDateTime>,
    reference_date: NaiveDate,
    period_start: NaiveTime,
    grace: TimeDelta,
) -> Option<Punctuality> {
    let observed = observed?;
    let threshold = reference_date.and_time(period_start) + grace;

    if observed > threshold {
        Some(Punctuality::Late)
    } else {
        Some(Punctuality::OnTime)
    }
}

pub fn check_in_status(
    shift: &ShiftConfig,
    shift_date: NaiveDate,
    check_in: Option<NaiveDateTime>,
) -> Option<Punctuality> {
    derive_status(check_in, shift_date, shift.shift_start, shift.grace_period())
}

/// Calendar date the break end belongs to: the day after `shift_date` for
/// night shifts whose break falls after midnight.
pub fn break_reference_date(shift: &ShiftConfig, shift_date: NaiveDate) -> NaiveDate {
    if shift.break_on_next_day() {
        shift_date.succ_opt().unwrap_or(shift_date)
    } else {
        shift_date
    }
}

pub fn break_in_status(
    shift: &ShiftConfig,
    shift_date: NaiveDate,
    break_in: Option<NaiveDateTime>,
) -> Option<Punctuality> {
    derive_status(
        break_in,
        break_reference_date(shift, shift_date),
        shift.break_end,
        shift.break_grace_period(),
    )
}
