//! Two-tier break detection.
//!
//! 1. Gap detection: among the bursts starting inside the break search
//!    window, a silence of at least `minimum_break_gap_minutes` between
//!    one burst's end and the next burst's start is a break. When several
//!    gaps qualify, the shift's [`GapSelector`] picks one.
//! 2. Midpoint fallback, only when no gap qualifies: bursts are split at
//!    the configured midpoint (a burst starting exactly at the midpoint is
//!    "before") and the break is read from the split.

use crate::config::{GapPolicy, ShiftConfig};
use crate::models::{Burst, TimeWindow};
use crate::utils::time::circular_distance_secs;
use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreakPair {
    pub break_out: Option<NaiveDateTime>,
    pub break_in: Option<NaiveDateTime>,
}

impl BreakPair {
    pub fn none() -> Self {
        Self::default()
    }
}

/// A qualifying silence between two consecutive bursts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gap {
    /// `end` of the burst before the silence.
    pub break_out: NaiveDateTime,
    /// `start` of the burst after the silence.
    pub break_in: NaiveDateTime,
    pub duration: TimeDelta,
}

impl From<Gap> for BreakPair {
    fn from(g: Gap) -> Self {
        Self {
            break_out: Some(g.break_out),
            break_in: Some(g.break_in),
        }
    }
}

/// Chooses one gap among several qualifying gaps.
///
/// `gaps` is never empty and is in chronological order; the returned value
/// is an index into it.
pub trait GapSelector {
    fn select(&self, gaps: &[Gap]) -> usize;
}

pub struct FirstGap;

impl GapSelector for FirstGap {
    fn select(&self, _gaps: &[Gap]) -> usize {
        0
    }
}

/// Break-out closest to a checkpoint time; ties go to the earlier gap.
pub struct NearestCheckpoint {
    pub checkpoint: NaiveTime,
}

impl GapSelector for NearestCheckpoint {
    fn select(&self, gaps: &[Gap]) -> usize {
        nearest_by(gaps, |g| circular_distance_secs(g.break_out.time(), self.checkpoint))
    }
}

/// Break-in closest to the end of the break grace period; ties go to the earlier gap.
pub struct NearestBreakEnd {
    pub target: NaiveTime,
}

impl GapSelector for NearestBreakEnd {
    fn select(&self, gaps: &[Gap]) -> usize {
        nearest_by(gaps, |g| circular_distance_secs(g.break_in.time(), self.target))
    }
}

fn nearest_by<F: Fn(&Gap) -> i64>(gaps: &[Gap], distance: F) -> usize {
    gaps.iter()
        .enumerate()
        .min_by_key(|(idx, g)| (distance(g), *idx))
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Selector configured for `shift`. Validation guarantees the checkpoint
/// exists when the policy needs it; without one it degrades to `FirstGap`.
pub fn selector_for(shift: &ShiftConfig) -> Box<dyn GapSelector> {
    match (shift.gap_policy, shift.break_out_checkpoint) {
        (GapPolicy::NearestCheckpoint, Some(checkpoint)) => {
            Box::new(NearestCheckpoint { checkpoint })
        }
        (GapPolicy::NearestBreakEnd, _) => Box::new(NearestBreakEnd {
            target: shift.break_in_cutoff(),
        }),
        _ => Box::new(FirstGap),
    }
}

/// Consecutive end-to-start gaps of at least `min_gap` (inclusive).
pub fn qualifying_gaps(bursts: &[&Burst], min_gap: TimeDelta) -> Vec<Gap> {
    bursts
        .windows(2)
        .filter_map(|w| {
            let duration = w[0].gap_to(w[1]);
            (duration >= min_gap).then_some(Gap {
                break_out: w[0].end,
                break_in: w[1].start,
                duration,
            })
        })
        .collect()
}

/// Detect the break of one shift instance using the shift's configured selector.
pub fn detect_break(bursts: &[Burst], shift: &ShiftConfig) -> BreakPair {
    let selector = selector_for(shift);
    detect_break_with(bursts, shift, selector.as_ref())
}

/// Detect the break of one shift instance. `bursts` must be sorted by `start`.
pub fn detect_break_with(
    bursts: &[Burst],
    shift: &ShiftConfig,
    selector: &dyn GapSelector,
) -> BreakPair {
    let window = shift.break_search_window;
    let min_gap = shift.minimum_break_gap();

    let candidates: Vec<&Burst> = bursts
        .iter()
        .filter(|b| window.contains(b.start.time()))
        .collect();

    if candidates.is_empty() {
        return BreakPair::none();
    }

    if let Some(pair) = pick_gap(&candidates, min_gap, selector) {
        return pair;
    }

    midpoint_fallback(&candidates, window, shift.break_midpoint, min_gap, selector)
}

fn pick_gap(bursts: &[&Burst], min_gap: TimeDelta, selector: &dyn GapSelector) -> Option<BreakPair> {
    let gaps = qualifying_gaps(bursts, min_gap);
    if gaps.is_empty() {
        return None;
    }

    let idx = selector.select(&gaps).min(gaps.len() - 1);
    Some(gaps[idx].into())
}

fn midpoint_fallback(
    candidates: &[&Burst],
    window: TimeWindow,
    midpoint: NaiveTime,
    min_gap: TimeDelta,
    selector: &dyn GapSelector,
) -> BreakPair {
    let mid = window.offset_of(midpoint);

    let (before, after): (Vec<&Burst>, Vec<&Burst>) = candidates
        .iter()
        .copied()
        .partition(|b| window.offset_of(b.start.time()) <= mid);

    // The one-sided arms re-run `pick_gap` on a sub-slice; it cannot succeed
    // after the full candidate list found no gap, and is kept as a guard.
    match (before.last(), after.first()) {
        // Swipes on both sides of the midpoint
        (Some(last_before), Some(first_after)) => BreakPair {
            break_out: Some(last_before.end),
            break_in: Some(first_after.start),
        },
        // Everything before the midpoint: break-in unknown
        (Some(last_before), None) => {
            pick_gap(&before, min_gap, selector).unwrap_or(BreakPair {
                break_out: Some(last_before.end),
                break_in: None,
            })
        }
        // Everything after the midpoint: departure unknown
        (None, Some(first_after)) => pick_gap(&after, min_gap, selector).unwrap_or(BreakPair {
            break_out: None,
            break_in: Some(first_after.start),
        }),
        (None, None) => BreakPair::none(),
    }
}
