use super::reader::RawSwipe;
use crate::config::RuleConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{EmployeeRef, SwipeEvent};
use crate::utils::date::parse_date_lenient;
use crate::utils::time::parse_time;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub loaded: usize,
    pub rejected_status: usize,
    pub rejected_user: usize,
    pub accepted: usize,
}

/// Keep successful swipes of mapped users and turn them into `SwipeEvent`s.
///
/// Filtered rows are never parsed. A surviving row with an unreadable date
/// or time aborts the whole run.
pub fn validate_swipes(
    rows: &[RawSwipe],
    cfg: &RuleConfig,
) -> AppResult<(Vec<SwipeEvent>, ValidationReport)> {
    let mut report = ValidationReport {
        loaded: rows.len(),
        ..Default::default()
    };

    let wanted_status = cfg.status_filter.trim();
    let mut swipes = Vec::with_capacity(rows.len());

    for row in rows {
        if row.status.trim() != wanted_status {
            report.rejected_status += 1;
            continue;
        }

        let Some(mapping) = cfg.users.get(row.name.trim()) else {
            report.rejected_user += 1;
            continue;
        };

        let date = parse_date_lenient(&row.date);
        let time = parse_time(&row.time);

        let (Some(date), Some(time)) = (date, time) else {
            return Err(AppError::InvalidTimestamp {
                row: row.line,
                employee: row.name.clone(),
                value: format!("{} {}", row.date, row.time),
            });
        };

        swipes.push(SwipeEvent::new(
            EmployeeRef::new(mapping.output_id.clone(), mapping.output_name.clone()),
            date.and_time(time),
        ));
    }

    report.accepted = swipes.len();
    Ok((swipes, report))
}
