//! Display configuration for folio.
//!
//! This crate loads `config.yaml` (locale default plus timeline chart
//! tuning) and resolves where that file lives on the current machine.

pub mod config;
pub mod paths;
