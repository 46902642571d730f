//! The composed layout pass: records in, rendered-ready timeline out.

use serde::Serialize;

use crate::lanes::{LanedRecord, assign_lanes_validated};
use crate::month::Month;
use crate::position::{Position, calculate_position};
use crate::range::{TimeRange, YearMarker, derive_range, year_markers};
use crate::record::WorkRecord;
use crate::validate::{Rejection, validate};

/// One record placed on the timeline.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineItem {
    pub record: WorkRecord,
    pub lane: usize,
    pub position: Position,
}

/// Everything a renderer needs for one timeline pass.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineLayout {
    /// The shared "now" this pass was computed against.
    pub now: Month,
    pub range: TimeRange,
    /// Total number of lanes in use.
    pub lanes: usize,
    /// Items ordered by start month ascending.
    pub items: Vec<TimelineItem>,
    pub markers: Vec<YearMarker>,
    /// Records dropped by validation, with reasons.
    pub rejections: Vec<Rejection>,
}

/// Runs the full pipeline: validate, derive the window, assign lanes,
/// position each survivor, and anchor year markers.
///
/// `now` is resolved once by the caller and threaded through every
/// stage, so ongoing records agree on their effective end everywhere.
/// Validation runs exactly once per pass.
pub fn layout(records: &[WorkRecord], now: Month) -> TimelineLayout {
    tracing::debug!(records = records.len(), %now, "computing timeline layout");
    let validated = validate(records);
    let range = derive_range(&validated.records, now);
    let laned = assign_lanes_validated(validated.records, now);
    let lanes = laned.iter().map(|item| item.lane).max().map_or(0, |max| max + 1);
    let items: Vec<TimelineItem> = laned
        .into_iter()
        .map(|LanedRecord { record, lane }| {
            let position = calculate_position(&record, &range, now);
            TimelineItem {
                record,
                lane,
                position,
            }
        })
        .collect();
    let markers = year_markers(&range);
    TimelineLayout {
        now,
        range,
        lanes,
        items,
        markers,
        rejections: validated.rejections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Category;
    use crate::record::WorkRecordBuilder;
    use crate::validate::ValidationError;

    fn month(token: &str) -> Month {
        token.parse().unwrap()
    }

    fn fixture() -> Vec<WorkRecord> {
        vec![
            WorkRecordBuilder::new("Harbor Systems")
                .start("2019-01")
                .end("2020-06")
                .category(Category::FullTime)
                .build(),
            WorkRecordBuilder::new("Nightshift Studio")
                .start("2019-09")
                .end("2020-02")
                .category(Category::Freelance)
                .build(),
            WorkRecordBuilder::new("Current Gig")
                .start("2020-06")
                .category(Category::FullTime)
                .build(),
            WorkRecordBuilder::new("Broken")
                .start("2020-01")
                .end("2019-01")
                .category(Category::Contract)
                .build(),
        ]
    }

    #[test]
    fn full_pass_over_fixture() {
        let now = month("2024-06");
        let result = layout(&fixture(), now);

        assert_eq!(result.now, now);
        assert_eq!(result.range.start, month("2019-01"));
        assert_eq!(result.range.end, now);

        // Three survivors; Broken is rejected.
        assert_eq!(result.items.len(), 3);
        assert_eq!(result.rejections.len(), 1);
        assert!(matches!(
            result.rejections[0].reason,
            ValidationError::EndBeforeStart { .. }
        ));

        // Harbor and Nightshift overlap; Current Gig touches Harbor's end.
        let by_org: Vec<(&str, usize)> = result
            .items
            .iter()
            .map(|i| (i.record.organization.as_str(), i.lane))
            .collect();
        assert_eq!(
            by_org,
            vec![
                ("Harbor Systems", 0),
                ("Nightshift Studio", 1),
                ("Current Gig", 0),
            ]
        );
        assert_eq!(result.lanes, 2);

        // 2019 through 2024, one marker per year.
        let years: Vec<i32> = result.markers.iter().map(|m| m.year).collect();
        assert_eq!(years, vec![2019, 2020, 2021, 2022, 2023, 2024]);
    }

    #[test]
    fn positions_match_the_shared_now() {
        let now = month("2024-06");
        let result = layout(&fixture(), now);
        let current = result
            .items
            .iter()
            .find(|i| i.record.organization == "Current Gig")
            .unwrap();
        // Ongoing record runs to the end of the window.
        let bottom = current.position.top + current.position.height;
        assert!((bottom - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_produces_empty_layout() {
        let now = month("2024-06");
        let result = layout(&[], now);
        assert_eq!(result.lanes, 0);
        assert!(result.items.is_empty());
        assert!(result.rejections.is_empty());
        assert_eq!(result.range.span_months(), 0);
        assert_eq!(result.markers.len(), 1);
    }

    #[test]
    fn layout_serializes_for_machine_output() {
        let result = layout(&fixture(), month("2024-06"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["now"], "2024-06");
        assert_eq!(json["lanes"], 2);
        assert!(json["items"].as_array().unwrap().len() == 3);
        assert!(json["rejections"][0]["reason"]
            .as_str()
            .unwrap()
            .contains("precedes"));
    }
}
