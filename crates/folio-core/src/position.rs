//! Percentage positioning of months and records within a range.

use serde::{Deserialize, Serialize};

use crate::month::Month;
use crate::range::TimeRange;
use crate::record::WorkRecord;

/// Vertical placement of a record, in percent of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub top: f64,
    pub height: f64,
}

/// Maps a month to its percentage offset within the range.
///
/// A degenerate range (zero or negative span) maps every month to 0.
/// Months outside the range clamp to the `[0, 100]` boundary.
pub fn month_to_percent(month: Month, range: &TimeRange) -> f64 {
    let total = range.span_months();
    if total <= 0 {
        return 0.0;
    }
    let relative = month.ordinal() - range.start.ordinal();
    let percent = relative as f64 / f64::from(total) * 100.0;
    percent.clamp(0.0, 100.0)
}

/// Computes a record's `(top, height)` placement within the range.
///
/// Height may be 0 when start and effective end coincide; any minimum
/// visual height is the renderer's concern. A record with unparseable
/// dates sits collapsed at the origin; validated input never hits that
/// path.
pub fn calculate_position(record: &WorkRecord, range: &TimeRange, now: Month) -> Position {
    let (Some(start), Some(end)) = (record.start_month(), record.effective_end(now)) else {
        return Position {
            top: 0.0,
            height: 0.0,
        };
    };
    let top = month_to_percent(start, range);
    let bottom = month_to_percent(end, range);
    Position {
        top,
        height: bottom - top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Category;
    use crate::record::WorkRecordBuilder;

    fn month(token: &str) -> Month {
        token.parse().unwrap()
    }

    fn range(start: &str, end: &str) -> TimeRange {
        TimeRange {
            start: month(start),
            end: month(end),
        }
    }

    #[test]
    fn range_boundaries_map_to_0_and_100() {
        let range = range("2020-01", "2021-01");
        assert_eq!(month_to_percent(month("2020-01"), &range), 0.0);
        assert_eq!(month_to_percent(month("2021-01"), &range), 100.0);
    }

    #[test]
    fn interior_months_map_proportionally() {
        let range = range("2020-01", "2021-01");
        assert_eq!(month_to_percent(month("2020-07"), &range), 50.0);
        assert_eq!(month_to_percent(month("2020-04"), &range), 25.0);
    }

    #[test]
    fn degenerate_range_maps_everything_to_zero() {
        let range = range("2020-06", "2020-06");
        assert_eq!(month_to_percent(month("2020-06"), &range), 0.0);
        assert_eq!(month_to_percent(month("2035-01"), &range), 0.0);
    }

    #[test]
    fn out_of_range_months_clamp() {
        let range = range("2020-01", "2021-01");
        assert_eq!(month_to_percent(month("2019-05"), &range), 0.0);
        assert_eq!(month_to_percent(month("2022-03"), &range), 100.0);
    }

    #[test]
    fn position_covers_start_to_end() {
        let range = range("2020-01", "2022-01");
        let record = WorkRecordBuilder::new("Acme Corp")
            .start("2020-07")
            .end("2021-07")
            .category(Category::FullTime)
            .build();
        let pos = calculate_position(&record, &range, month("2024-06"));
        assert_eq!(pos.top, 25.0);
        assert_eq!(pos.height, 50.0);
    }

    #[test]
    fn ongoing_record_reaches_now() {
        let range = range("2020-01", "2024-06");
        let record = WorkRecordBuilder::new("Acme Corp")
            .start("2020-01")
            .category(Category::FullTime)
            .build();
        let pos = calculate_position(&record, &range, month("2024-06"));
        assert_eq!(pos.top, 0.0);
        assert_eq!(pos.height, 100.0);
    }

    #[test]
    fn single_month_record_has_zero_height() {
        let range = range("2020-01", "2021-01");
        let record = WorkRecordBuilder::new("Acme Corp")
            .start("2020-07")
            .end("2020-07")
            .category(Category::Contract)
            .build();
        let pos = calculate_position(&record, &range, month("2024-06"));
        assert_eq!(pos.top, 50.0);
        assert_eq!(pos.height, 0.0);
    }

    #[test]
    fn unparseable_record_collapses_to_origin() {
        let range = range("2020-01", "2021-01");
        let record = WorkRecordBuilder::new("Acme Corp")
            .start("whenever")
            .category(Category::FullTime)
            .build();
        let pos = calculate_position(&record, &range, month("2024-06"));
        assert_eq!(pos.top, 0.0);
        assert_eq!(pos.height, 0.0);
    }
}
