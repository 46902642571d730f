//! Terminal UI helpers for folio.
//!
//! Provides Ayu-themed color styling and terminal detection for CLI
//! output.

pub mod styles;
pub mod terminal;
