//! Enum types for the folio domain.
//!
//! String-backed with a catch-all `Other(String)` so foreign data files
//! deserialize losslessly; validation decides what to do with unknown
//! values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ===========================================================================
// Category
// ===========================================================================

/// How a work engagement was contracted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    FullTime,
    PartTime,
    Freelance,
    Contract,
    /// Catch-all for unknown category strings. Preserved through serde,
    /// rejected by record validation.
    Other(String),
}

impl Category {
    /// All built-in categories, in display order.
    pub const BUILTIN: [Category; 4] = [
        Category::FullTime,
        Category::PartTime,
        Category::Freelance,
        Category::Contract,
    ];

    /// Returns the string representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::FullTime => "full-time",
            Self::PartTime => "part-time",
            Self::Freelance => "freelance",
            Self::Contract => "contract",
            Self::Other(s) => s.as_str(),
        }
    }

    /// Returns `true` if this is a built-in (non-catch-all) category.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s {
            "full-time" => Self::FullTime,
            "part-time" => Self::PartTime,
            "freelance" => Self::Freelance,
            "contract" => Self::Contract,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        // Check known variants first to avoid allocation in common case.
        match s.as_str() {
            "full-time" => Self::FullTime,
            "part-time" => Self::PartTime,
            "freelance" => Self::Freelance,
            "contract" => Self::Contract,
            _ => Self::Other(s),
        }
    }
}
