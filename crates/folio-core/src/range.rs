//! Observation window derivation for the timeline.

use serde::{Deserialize, Serialize};

use crate::month::Month;
use crate::position::month_to_percent;
use crate::record::WorkRecord;

/// Inclusive month window covering every record on the timeline.
///
/// Derived fresh for each layout pass; never cached across passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: Month,
    pub end: Month,
}

impl TimeRange {
    /// Number of months from start to end. Zero for a degenerate range.
    pub fn span_months(&self) -> i32 {
        self.end.ordinal() - self.start.ordinal()
    }
}

/// A calendar-year gridline, anchored at that year's January.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearMarker {
    pub year: i32,
    pub percent: f64,
}

/// Derives the observation window: earliest start to latest effective end.
///
/// Ongoing records extend the window to `now`. Records whose dates fail
/// to parse are skipped; validated input never hits that path. An empty
/// input yields the degenerate `(now, now)` window.
pub fn derive_range(records: &[WorkRecord], now: Month) -> TimeRange {
    let mut window: Option<(Month, Month)> = None;
    for record in records {
        let Some(start) = record.start_month() else {
            continue;
        };
        let Some(end) = record.effective_end(now) else {
            continue;
        };
        window = Some(match window {
            Some((lo, hi)) => (lo.min(start), hi.max(end)),
            None => (start, end),
        });
    }
    match window {
        Some((start, end)) => TimeRange { start, end },
        None => TimeRange {
            start: now,
            end: now,
        },
    }
}

/// One marker per calendar year touched by the range.
///
/// The first year's January may fall before `range.start`; its percent
/// clamps to 0 like any out-of-window month.
pub fn year_markers(range: &TimeRange) -> Vec<YearMarker> {
    (range.start.year()..=range.end.year())
        .map(|year| YearMarker {
            year,
            percent: month_to_percent(Month::january(year), range),
        })
        .collect()
}
