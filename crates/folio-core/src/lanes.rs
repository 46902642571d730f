//! Greedy lane assignment for overlapping records.
//!
//! Records sorted by start month are packed first-fit into lanes; two
//! records share a lane only when their intervals do not overlap. A
//! record starting the month another ends is a boundary touch, not an
//! overlap. Earliest-start plus first-fit yields the minimum lane count.

use serde::Serialize;

use crate::month::Month;
use crate::record::WorkRecord;
use crate::validate::validate;

/// A work record with its assigned lane.
///
/// Lanes are dense indices starting at 0, stable within one assignment
/// run. They are layout output, not record identity.
#[derive(Debug, Clone, Serialize)]
pub struct LanedRecord {
    pub record: WorkRecord,
    pub lane: usize,
}

/// Validates records and assigns each survivor a lane.
///
/// Output is ordered by start month ascending, ties keeping input order.
/// Validation rejections are dropped silently here; use
/// [`crate::layout::layout`] when the rejections matter.
pub fn assign_lanes(records: &[WorkRecord], now: Month) -> Vec<LanedRecord> {
    assign_lanes_validated(validate(records).records, now)
}

/// First-fit lane packing over already-validated records.
pub(crate) fn assign_lanes_validated(records: Vec<WorkRecord>, now: Month) -> Vec<LanedRecord> {
    let mut dated: Vec<(Month, Month, WorkRecord)> = records
        .into_iter()
        .filter_map(|record| {
            let start = record.start_month()?;
            let end = record.effective_end(now)?;
            Some((start, end, record))
        })
        .collect();
    // Stable: equal starts keep their input order.
    dated.sort_by_key(|(start, _, _)| *start);

    // One end ordinal per open lane, indexed by lane number.
    let mut lane_ends: Vec<i32> = Vec::new();
    let mut laned = Vec::with_capacity(dated.len());
    for (start, end, record) in dated {
        let lane = match lane_ends
            .iter()
            .position(|&lane_end| lane_end <= start.ordinal())
        {
            Some(lane) => {
                lane_ends[lane] = end.ordinal();
                lane
            }
            None => {
                lane_ends.push(end.ordinal());
                lane_ends.len() - 1
            }
        };
        laned.push(LanedRecord { record, lane });
    }
    laned
}
