//! WorkRecord -- one employment or engagement period on the timeline.

use serde::{Deserialize, Serialize};

use crate::enums::Category;
use crate::locale::LocalizedText;
use crate::month::Month;

/// Helper for `skip_serializing_if` on `Vec` fields.
fn is_empty_vec<T>(v: &Vec<T>) -> bool {
    v.is_empty()
}

/// One period of work at an organization.
///
/// Date fields are kept in raw token form; records may arrive from user
/// data files with malformed dates, and the validator decides what
/// survives. Parsed views are offered by [`WorkRecord::start_month`] and
/// [`WorkRecord::effective_end`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    #[serde(default)]
    pub organization: String,

    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub title: LocalizedText,

    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub description: LocalizedText,

    /// Start month token (`YYYY-MM`). Required.
    #[serde(default)]
    pub start: String,

    /// End month token. Absent means the engagement is ongoing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Technologies used, in display order.
    #[serde(default, skip_serializing_if = "is_empty_vec")]
    pub tags: Vec<String>,
}

impl WorkRecord {
    /// Returns `true` if the record has no concrete end month.
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }

    /// Parsed start month, or `None` if the token is malformed.
    pub fn start_month(&self) -> Option<Month> {
        self.start.parse().ok()
    }

    /// End month for computation: the parsed `end` token, or the shared
    /// `now` for ongoing records. `None` if a present token is malformed.
    pub fn effective_end(&self, now: Month) -> Option<Month> {
        match &self.end {
            Some(token) => token.parse().ok(),
            None => Some(now),
        }
    }
}

/// Builder for constructing a [`WorkRecord`] with a fluent API.
pub struct WorkRecordBuilder {
    record: WorkRecord,
}

impl WorkRecordBuilder {
    /// Creates a new builder for the given organization.
    pub fn new(organization: impl Into<String>) -> Self {
        let mut record = WorkRecord::default();
        record.organization = organization.into();
        Self { record }
    }

    pub fn title(mut self, en: impl Into<String>, zh: impl Into<String>) -> Self {
        self.record.title = LocalizedText::new(en, zh);
        self
    }

    pub fn description(mut self, en: impl Into<String>, zh: impl Into<String>) -> Self {
        self.record.description = LocalizedText::new(en, zh);
        self
    }

    pub fn start(mut self, token: impl Into<String>) -> Self {
        self.record.start = token.into();
        self
    }

    pub fn end(mut self, token: impl Into<String>) -> Self {
        self.record.end = Some(token.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.record.category = Some(category);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Consumes the builder and returns the constructed [`WorkRecord`].
    pub fn build(self) -> WorkRecord {
        self.record
    }
}
