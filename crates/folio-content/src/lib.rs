//! Built-in content for the folio portfolio.
//!
//! Page text lives in [`i18n`] (one table per locale), the owner's work
//! history and project list live in [`experience`] and [`projects`], and
//! both can be swapped for user-supplied JSON data files.

pub mod experience;
pub mod i18n;
pub mod profile;
pub mod projects;

use std::io;

/// Error type for loading content data files.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read data file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse data file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for content loading.
pub type Result<T> = std::result::Result<T, ContentError>;
