//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds all the state a command handler needs:
//! resolved locale, loaded display configuration, and global flags.

use std::path::PathBuf;

use anyhow::{Context, Result};

use folio_config::config::{DisplayConfig, load_config};
use folio_config::paths;
use folio_core::locale::Locale;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Resolved display locale.
    pub locale: Locale,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,

    /// Loaded display configuration.
    pub config: DisplayConfig,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// The config file is loaded first (`--config` flag, then the
    /// discovery chain in [`paths::config_path`]), because the locale
    /// chain ends at the config file:
    /// `--locale` flag (clap folds `FOLIO_LOCALE` into it) > config > English.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let config_path = global
            .config
            .as_ref()
            .map(PathBuf::from)
            .or_else(paths::config_path);

        let config = match &config_path {
            Some(path) => load_config(Some(path))
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => DisplayConfig::default(),
        };

        let locale = resolve_locale(global.locale.as_deref(), &config)?;

        Ok(Self {
            locale,
            json: global.json,
            verbose: global.verbose,
            quiet: global.quiet,
            config,
        })
    }
}

/// Resolves the display locale using the priority chain.
///
/// Priority: explicit flag (or `FOLIO_LOCALE`, which clap maps to the
/// same field) > config file > English. An unsupported value on the
/// flag is an error rather than a silent fallback.
fn resolve_locale(flag_value: Option<&str>, config: &DisplayConfig) -> Result<Locale> {
    if let Some(value) = flag_value {
        if !value.is_empty() {
            return Ok(value.parse()?);
        }
    }
    Ok(config.locale.unwrap_or_default())
}
