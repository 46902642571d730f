//! Month tokens -- the `YYYY-MM` unit all timeline arithmetic runs on.
//!
//! A [`Month`] is parsed from the fixed-width token form (4-digit year,
//! dash, 2-digit month). Because the width is fixed, lexicographic order
//! of the token form and numeric order of [`Month::ordinal`] agree; the
//! range deriver relies on that.

use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error type for month token parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonthParseError {
    #[error("month token must have the form YYYY-MM (got {0:?})")]
    Malformed(String),

    #[error("month must be between 01 and 12 (got {0:02})")]
    MonthOutOfRange(u32),
}

/// A calendar month, the resolution of every timeline computation.
///
/// Derived `Ord` compares `(year, month)` pairs, which matches ordinal
/// order for any in-range month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// January of the given year. Year markers anchor here.
    pub fn january(year: i32) -> Self {
        Self { year, month: 1 }
    }

    /// The month of today's local date.
    ///
    /// Callers resolve this once per layout pass and thread the value
    /// through; the engine itself never consults the clock.
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Returns `true` if the string is a well-formed `YYYY-MM` token.
    pub fn is_valid_token(s: &str) -> bool {
        s.parse::<Self>().is_ok()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Linear month count (`year * 12 + month`).
    ///
    /// Internally consistent for comparison and span arithmetic; not a
    /// calendar epoch.
    pub fn ordinal(&self) -> i32 {
        self.year * 12 + self.month as i32
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        // Exactly "DDDD-DD"; anything looser (5-digit years, "2020-1",
        // surrounding whitespace) is rejected.
        let shape_ok = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !shape_ok {
            return Err(MonthParseError::Malformed(s.to_owned()));
        }
        let year: i32 = s[..4]
            .parse()
            .map_err(|_| MonthParseError::Malformed(s.to_owned()))?;
        let month: u32 = s[5..]
            .parse()
            .map_err(|_| MonthParseError::Malformed(s.to_owned()))?;
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
