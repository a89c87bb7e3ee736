//! Shift-instance detection.
//!
//! A burst whose start falls in some shift's check-in window opens an
//! instance of that shift and absorbs every following burst up to the end
//! of the shift's activity window, possibly on the next calendar day.
//! Bursts that open nothing and are absorbed by nothing are orphans.

use crate::config::{RuleConfig, ShiftConfig};
use crate::models::{Burst, ShiftInstance};
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Default, Clone)]
pub struct InstanceScan {
    pub instances: Vec<ShiftInstance>,
    pub orphans: Vec<Burst>,
}

/// Last instant (inclusive) a burst may start and still belong to an
/// instance of `shift` opened on `shift_date`.
pub fn activity_window_end(shift: &ShiftConfig, shift_date: NaiveDate) -> NaiveDateTime {
    let end_date = if shift.crosses_midnight() {
        shift_date.succ_opt().unwrap_or(shift_date)
    } else {
        shift_date
    };

    end_date.and_time(shift.check_out_window.end)
}

/// Partition one employee's bursts (sorted by `start`) into shift instances.
///
/// The scan is strictly forward: the first check-in match wins, and a
/// burst already claimed can never open another instance.
pub fn detect_instances(bursts: &[Burst], cfg: &RuleConfig) -> InstanceScan {
    let mut scan = InstanceScan::default();
    let mut i = 0;

    while i < bursts.len() {
        let trigger = &bursts[i];

        let Some(shift) = cfg.matching_shift(trigger.start.time()) else {
            scan.orphans.push(trigger.clone());
            i += 1;
            continue;
        };

        let shift_date = trigger.start.date();
        let window_end = activity_window_end(shift, shift_date);

        let mut j = i + 1;
        while j < bursts.len() && bursts[j].start <= window_end {
            j += 1;
        }

        scan.instances.push(ShiftInstance {
            employee: trigger.employee.clone(),
            shift_code: shift.code.clone(),
            shift_date,
            bursts: bursts[i..j].to_vec(),
        });

        i = j;
    }

    scan
}
