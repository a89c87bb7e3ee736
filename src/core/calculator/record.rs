//! Event extraction for one shift instance.

use super::breaks::detect_break;
use super::clocking::{find_check_in, find_check_out};
use super::punctuality::{break_in_status, check_in_status};
use crate::config::ShiftConfig;
use crate::models::{AttendanceRecord, ShiftInstance};

pub fn extract_record(instance: &ShiftInstance, shift: &ShiftConfig) -> AttendanceRecord {
    let bursts = &instance.bursts;

    let check_in = find_check_in(bursts, shift);
    let check_out = find_check_out(bursts, shift);
    let brk = detect_break(bursts, shift);

    AttendanceRecord {
        date: instance.shift_date,
        employee: instance.employee.clone(),
        shift_code: shift.code.clone(),
        shift: shift.display_name.clone(),
        check_in,
        check_in_status: check_in_status(shift, instance.shift_date, check_in),
        break_out: brk.break_out,
        break_in: brk.break_in,
        break_in_status: break_in_status(shift, instance.shift_date, brk.break_in),
        check_out,
    }
}
