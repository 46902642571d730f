//! Configuration types and loading for folio.
//!
//! The main entry point is [`DisplayConfig`], representing the contents
//! of `config.yaml`. All fields use serde defaults so a partial or
//! missing file yields sensible values.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use folio_core::locale::Locale;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file contained invalid YAML.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Timeline section
// ---------------------------------------------------------------------------

/// Tuning for the experience timeline chart.
///
/// These are the visual constants the layout engine deliberately does
/// not own: how tall the chart is, how wide a lane renders, and how
/// small a bar is allowed to get.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Chart height in terminal rows.
    #[serde(default = "default_height")]
    pub height: u16,

    /// Columns each lane occupies.
    #[serde(default = "default_lane_width", rename = "lane-width")]
    pub lane_width: u16,

    /// Minimum rows a bar occupies, so one-month engagements stay visible.
    #[serde(default = "default_min_rows", rename = "min-rows")]
    pub min_rows: u16,

    /// Whether to draw the year gutter beside the chart.
    #[serde(default = "default_markers")]
    pub markers: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            lane_width: default_lane_width(),
            min_rows: default_min_rows(),
            markers: default_markers(),
        }
    }
}

impl TimelineConfig {
    /// Chart height with the floor applied; below 2 rows there is no
    /// room for both ends of a bar.
    pub fn effective_height(&self) -> u16 {
        self.height.max(2)
    }
}

fn default_height() -> u16 {
    20
}

fn default_lane_width() -> u16 {
    3
}

fn default_min_rows() -> u16 {
    1
}

fn default_markers() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// The full folio configuration, corresponding to `config.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    /// Default locale when neither flag nor environment picks one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,

    /// Timeline chart tuning.
    #[serde(default)]
    pub timeline: TimelineConfig,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration from the given path.
///
/// `None`, a missing file, and an empty file all yield the default
/// [`DisplayConfig`].
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file exists but cannot be
/// read, or [`ConfigError::ParseError`] if it contains invalid YAML.
pub fn load_config(path: Option<&Path>) -> Result<DisplayConfig> {
    let Some(path) = path else {
        return Ok(DisplayConfig::default());
    };
    if !path.exists() {
        return Ok(DisplayConfig::default());
    }

    let content = std::fs::read_to_string(path)?;

    // An empty file is valid and yields default config.
    if content.trim().is_empty() {
        return Ok(DisplayConfig::default());
    }

    let config: DisplayConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
