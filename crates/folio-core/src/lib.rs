//! Core types and the timeline layout engine for folio.
//!
//! This crate holds the domain model (work records, categories, locales)
//! and the pure layout pipeline that turns date-ranged records into a
//! lane-assigned, percentage-positioned timeline.

pub mod enums;
pub mod lanes;
pub mod layout;
pub mod locale;
pub mod month;
pub mod position;
pub mod range;
pub mod record;
pub mod validate;
