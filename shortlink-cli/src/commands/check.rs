//! Compile the site without writing output and surface diagnostics.

use super::load_config;
use anyhow::{bail, Context, Result};
use serde::Serialize;
use shortlink_core::{Diagnostic, SiteBuilder};
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct CheckSummary<'a> {
    pages: usize,
    skipped: &'a [PathBuf],
    errors: usize,
    diagnostics: &'a [Diagnostic],
}

pub fn check_site(config_path: &Path, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let builder = SiteBuilder::new(config).context("Failed to set up site builder")?;
    let site_index = builder.build().context("Failed to check site")?;

    let diagnostics = &site_index.diagnostics;
    let errors = site_index.error_count();

    let summary = CheckSummary {
        pages: site_index.pages.len(),
        skipped: &site_index.skipped,
        errors,
        diagnostics,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for diag in diagnostics {
            println!("{diag}");
        }
        println!("Checked {} pages: {errors} errors", summary.pages);
    }

    if site_index.has_errors() {
        bail!("{errors} shortcut error(s) found");
    }
    Ok(())
}
