//! Resolution of the folio config file location.
//!
//! The `FOLIO_CONFIG` environment variable wins, then
//! `$XDG_CONFIG_HOME/folio/config.yaml`, then
//! `~/.config/folio/config.yaml`. An explicit `--config` flag is
//! handled above this layer and bypasses the chain entirely.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the config file path.
const CONFIG_ENV: &str = "FOLIO_CONFIG";

/// File name under the folio config directory.
const CONFIG_FILE: &str = "config.yaml";

/// Resolves the config file path for this machine.
///
/// Returns `None` when no environment variable in the chain is set, in
/// which case callers fall back to default configuration.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(explicit) = env::var(CONFIG_ENV) {
        if !explicit.is_empty() {
            return Some(PathBuf::from(explicit));
        }
    }
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join("folio").join(CONFIG_FILE));
        }
    }
    match env::var("HOME") {
        Ok(home) if !home.is_empty() => Some(
            PathBuf::from(home)
                .join(".config")
                .join("folio")
                .join(CONFIG_FILE),
        ),
        _ => None,
    }
}
