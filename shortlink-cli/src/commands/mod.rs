//! CLI command implementations.

pub mod build;
pub mod check;
pub mod list;
pub mod resolve;

pub use build::build_site;
pub use check::check_site;
pub use list::list_shortcuts;
pub use resolve::resolve_target;

use anyhow::{Context, Result};
use shortlink_core::{all_shortcuts, Config, Shortcuts};
use std::path::Path;

pub(crate) fn load_config(config_path: &Path) -> Result<Config> {
    tracing::debug!("Loading config from {:?}", config_path);
    Config::from_file(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))
}

/// Configured mapping, or the built-in catalog when there is no config file.
pub(crate) fn load_shortcuts(config_path: &Path) -> Result<Shortcuts> {
    if !config_path.exists() {
        tracing::debug!(
            "No config at {:?}; using the built-in catalog",
            config_path
        );
        return Ok(all_shortcuts().clone());
    }
    load_config(config_path)?
        .shortcuts()
        .context("Failed to build shortcut mapping")
}
