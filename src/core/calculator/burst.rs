//! Burst consolidation: rapid repeated swipes of one employee collapse
//! into a single atomic event carrying both its first and last timestamp.

use crate::models::{Burst, EmployeeRef, SwipeEvent};
use chrono::{NaiveDateTime, TimeDelta};
use std::collections::BTreeMap;

/// Group swipes per employee and consolidate each sequence.
///
/// Every output sequence is sorted by `start`. An empty input yields an
/// empty map.
pub fn consolidate(
    swipes: &[SwipeEvent],
    threshold: TimeDelta,
) -> BTreeMap<EmployeeRef, Vec<Burst>> {
    let mut per_employee: BTreeMap<EmployeeRef, Vec<NaiveDateTime>> = BTreeMap::new();

    for s in swipes {
        per_employee
            .entry(s.employee.clone())
            .or_default()
            .push(s.timestamp);
    }

    per_employee
        .into_iter()
        .map(|(employee, stamps)| {
            let bursts = consolidate_employee(&employee, &stamps, threshold);
            (employee, bursts)
        })
        .collect()
}

/// Consolidate the swipes of a single employee.
///
/// A new burst starts at the first swipe and at every swipe whose gap to
/// the previous one is strictly greater than `threshold`; a gap exactly
/// equal to the threshold stays in the same burst.
pub fn consolidate_employee(
    employee: &EmployeeRef,
    timestamps: &[NaiveDateTime],
    threshold: TimeDelta,
) -> Vec<Burst> {
    let mut sorted = timestamps.to_vec();
    sorted.sort();

    let mut bursts: Vec<Burst> = Vec::new();

    for ts in sorted {
        match bursts.last_mut() {
            Some(current) if ts - current.end <= threshold => {
                current.end = ts;
                current.swipes += 1;
            }
            _ => bursts.push(Burst::single(employee.clone(), ts)),
        }
    }

    bursts
}
