//! Work record validation rules.
//!
//! Validation is a stable filter: surviving records keep their input
//! order and are never repaired. Each dropped record produces a
//! structured [`Rejection`] so callers can report what went missing.

use serde::{Serialize, Serializer};

use crate::month::Month;
use crate::record::WorkRecord;

/// Error type for record validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("organization is required")]
    OrganizationRequired,

    #[error("start month is required")]
    StartRequired,

    #[error("category is required")]
    CategoryRequired,

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("invalid start month: {0:?}")]
    InvalidStart(String),

    #[error("invalid end month: {0:?}")]
    InvalidEnd(String),

    #[error("end month {end} precedes start month {start}")]
    EndBeforeStart { start: Month, end: Month },
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A record dropped by validation, with the rule that dropped it.
#[derive(Debug, Clone, Serialize)]
pub struct Rejection {
    pub reason: ValidationError,
    pub record: WorkRecord,
}

/// Result of a batch validation pass.
#[derive(Debug, Clone)]
pub struct Validated {
    /// Surviving records, input order preserved.
    pub records: Vec<WorkRecord>,

    /// Dropped records with their reasons, input order preserved.
    pub rejections: Vec<Rejection>,
}

/// Validates a single record against the built-in rules.
///
/// Rules are checked in order and the first failure wins:
/// required fields, category known, start well-formed, end well-formed,
/// end not before start. Equal start and end months are allowed.
pub fn validate_record(record: &WorkRecord) -> Result<(), ValidationError> {
    // Required fields.
    if record.organization.is_empty() {
        return Err(ValidationError::OrganizationRequired);
    }
    if record.start.is_empty() {
        return Err(ValidationError::StartRequired);
    }
    let Some(category) = &record.category else {
        return Err(ValidationError::CategoryRequired);
    };
    // Category must be a built-in value.
    if !category.is_builtin() {
        return Err(ValidationError::UnknownCategory(
            category.as_str().to_owned(),
        ));
    }
    // Start must be a well-formed month token.
    let start: Month = record
        .start
        .parse()
        .map_err(|_| ValidationError::InvalidStart(record.start.clone()))?;
    // End, when present, must be well-formed and not precede start.
    if let Some(end_token) = &record.end {
        let end: Month = end_token
            .parse()
            .map_err(|_| ValidationError::InvalidEnd(end_token.clone()))?;
        if end < start {
            return Err(ValidationError::EndBeforeStart { start, end });
        }
    }

    Ok(())
}

/// Filters a batch of records down to the valid ones.
///
/// Never fails: malformed records are collected as rejections (and
/// mirrored to the log) while the rest flow through untouched.
pub fn validate(records: &[WorkRecord]) -> Validated {
    let mut kept = Vec::with_capacity(records.len());
    let mut rejections = Vec::new();
    for record in records {
        match validate_record(record) {
            Ok(()) => kept.push(record.clone()),
            Err(reason) => {
                tracing::warn!(
                    organization = %record.organization,
                    start = %record.start,
                    %reason,
                    "dropping invalid work record"
                );
                rejections.push(Rejection {
                    reason,
                    record: record.clone(),
                });
            }
        }
    }
    Validated {
        records: kept,
        rejections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Category;
    use crate::record::WorkRecordBuilder;

    fn valid_record() -> WorkRecord {
        WorkRecordBuilder::new("Acme Corp")
            .start("2020-01")
            .end("2020-06")
            .category(Category::FullTime)
            .build()
    }

    #[test]
    fn valid_record_passes() {
        assert!(validate_record(&valid_record()).is_ok());
    }

    #[test]
    fn ongoing_record_passes() {
        let record = WorkRecordBuilder::new("Acme Corp")
            .start("2022-03")
            .category(Category::Freelance)
            .build();
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn missing_organization_fails() {
        let mut record = valid_record();
        record.organization.clear();
        assert!(matches!(
            validate_record(&record),
            Err(ValidationError::OrganizationRequired)
        ));
    }

    #[test]
    fn missing_start_fails() {
        let mut record = valid_record();
        record.start.clear();
        assert!(matches!(
            validate_record(&record),
            Err(ValidationError::StartRequired)
        ));
    }

    #[test]
    fn missing_category_fails() {
        let mut record = valid_record();
        record.category = None;
        assert!(matches!(
            validate_record(&record),
            Err(ValidationError::CategoryRequired)
        ));
    }

    #[test]
    fn unknown_category_fails() {
        let mut record = valid_record();
        record.category = Some(Category::Other("internship".into()));
        match validate_record(&record) {
            Err(ValidationError::UnknownCategory(s)) => assert_eq!(s, "internship"),
            other => panic!("expected UnknownCategory, got {:?}", other),
        }
    }

    #[test]
    fn malformed_start_fails() {
        let mut record = valid_record();
        record.start = "2020-1".into();
        assert!(matches!(
            validate_record(&record),
            Err(ValidationError::InvalidStart(_))
        ));
    }

    #[test]
    fn malformed_end_fails() {
        let mut record = valid_record();
        record.end = Some("soon".into());
        assert!(matches!(
            validate_record(&record),
            Err(ValidationError::InvalidEnd(_))
        ));
    }

    #[test]
    fn empty_end_token_fails() {
        // An explicitly empty end is malformed; ongoing records omit the
        // field entirely.
        let mut record = valid_record();
        record.end = Some(String::new());
        assert!(matches!(
            validate_record(&record),
            Err(ValidationError::InvalidEnd(_))
        ));
    }

    #[test]
    fn end_before_start_fails() {
        let record = WorkRecordBuilder::new("Acme Corp")
            .start("2021-05")
            .end("2020-11")
            .category(Category::Contract)
            .build();
        assert!(matches!(
            validate_record(&record),
            Err(ValidationError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn equal_start_and_end_pass() {
        let record = WorkRecordBuilder::new("Acme Corp")
            .start("2020-04")
            .end("2020-04")
            .category(Category::PartTime)
            .build();
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn batch_keeps_order_and_collects_rejections() {
        let good_a = WorkRecordBuilder::new("First")
            .start("2019-01")
            .end("2019-12")
            .category(Category::FullTime)
            .build();
        let bad = WorkRecordBuilder::new("Broken")
            .start("2021-05")
            .end("2020-11")
            .category(Category::FullTime)
            .build();
        let good_b = WorkRecordBuilder::new("Second")
            .start("2020-02")
            .category(Category::Freelance)
            .build();

        let validated = validate(&[good_a, bad, good_b]);
        let orgs: Vec<&str> = validated
            .records
            .iter()
            .map(|r| r.organization.as_str())
            .collect();
        assert_eq!(orgs, vec!["First", "Second"]);
        assert_eq!(validated.rejections.len(), 1);
        assert_eq!(validated.rejections[0].record.organization, "Broken");
        assert!(matches!(
            validated.rejections[0].reason,
            ValidationError::EndBeforeStart { .. }
        ));
    }

    #[test]
    fn rejection_serializes_reason_as_message() {
        let mut record = valid_record();
        record.start = "garbage".into();
        let validated = validate(&[record]);
        let json = serde_json::to_string(&validated.rejections[0]).unwrap();
        assert!(json.contains("invalid start month"));
    }

    #[test]
    fn first_failing_rule_wins() {
        // Missing organization is reported even when dates are broken too.
        let record = WorkRecordBuilder::new("")
            .start("nope")
            .category(Category::FullTime)
            .build();
        assert!(matches!(
            validate_record(&record),
            Err(ValidationError::OrganizationRequired)
        ));
    }
}
