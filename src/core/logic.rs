use crate::config::RuleConfig;
use crate::core::calculator::{burst, instance, record};
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, SwipeEvent};

/// Counters reported after a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStats {
    pub swipes: usize,
    pub employees: usize,
    pub bursts: usize,
    pub orphan_bursts: usize,
    pub instances: usize,
}

#[derive(Debug, Default, Clone)]
pub struct Attendance {
    pub records: Vec<AttendanceRecord>,
    pub stats: PipelineStats,
}

pub struct Core;

impl Core {
    /// Burst consolidation → shift-instance detection → event extraction.
    ///
    /// Pure: the same swipes and rules always give the same records,
    /// sorted by date, employee and shift.
    pub fn build_attendance(swipes: &[SwipeEvent], cfg: &RuleConfig) -> AppResult<Attendance> {
        cfg.validate()?;

        let per_employee = burst::consolidate(swipes, cfg.burst_threshold());

        let mut stats = PipelineStats {
            swipes: swipes.len(),
            employees: per_employee.len(),
            ..Default::default()
        };

        let mut records = Vec::new();

        for bursts in per_employee.values() {
            stats.bursts += bursts.len();

            let scan = instance::detect_instances(bursts, cfg);
            stats.orphan_bursts += scan.orphans.len();
            stats.instances += scan.instances.len();

            for inst in &scan.instances {
                let shift = cfg.shift(&inst.shift_code).ok_or_else(|| {
                    AppError::Config(format!(
                        "unknown shift '{}' for employee {}",
                        inst.shift_code, inst.employee.name
                    ))
                })?;
                records.push(record::extract_record(inst, shift));
            }
        }

        records.sort_by(|a, b| {
            (a.date, &a.employee, &a.shift_code, a.check_in).cmp(&(
                b.date,
                &b.employee,
                &b.shift_code,
                b.check_in,
            ))
        });

        Ok(Attendance { records, stats })
    }
}
