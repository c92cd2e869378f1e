//! Build command implementation.

use super::load_config;
use anyhow::{bail, Context, Result};
use askama::Template;
use shortlink_core::{Config, Page, SiteBuilder, SiteIndex};
use shortlink_render::{page_url, IndexTemplate, PageEntry, PageTemplate};
use std::fs;
use std::path::Path;

/// Build the site and write every page that compiled.
///
/// Fails after writing if any page had errors, once all of them are printed.
pub fn build_site(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    tracing::info!("Building site: {}", config.site.title);

    let builder = SiteBuilder::new(config.clone()).context("Failed to set up site builder")?;
    let site_index = builder.build().context("Failed to build site")?;

    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir).context("Failed to create output directory")?;

    let base_url = config.normalized_base_url();
    for page in &site_index.pages {
        render_page(&config, page, &output_dir, &base_url)?;
    }
    render_index(&config, &site_index, &output_dir, &base_url)?;

    for diag in &site_index.diagnostics {
        eprintln!("{diag}");
    }

    if site_index.has_errors() {
        bail!(
            "{} shortcut error(s); failing pages were not written",
            site_index.error_count()
        );
    }

    println!(
        "Built {} pages into {}",
        site_index.pages.len(),
        output_dir.display()
    );
    Ok(())
}

fn render_page(config: &Config, page: &Page, output_dir: &Path, base_url: &str) -> Result<()> {
    let template = PageTemplate {
        title: page.title.clone(),
        description: page.description.clone(),
        content: page.content_html.clone(),
        site_title: config.site.title.clone(),
        base_url: base_url.to_string(),
    };
    let html = template.render().context("Failed to render page template")?;

    let target = output_dir.join(&page.output);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&target, html).with_context(|| format!("Failed to write {}", target.display()))?;
    tracing::debug!("Wrote {}", target.display());
    Ok(())
}

/// Generated listing, unless the site has its own `index.md`.
fn render_index(
    config: &Config,
    site_index: &SiteIndex,
    output_dir: &Path,
    base_url: &str,
) -> Result<()> {
    if site_index
        .pages
        .iter()
        .any(|p| p.output == Path::new("index.html"))
    {
        return Ok(());
    }

    let items = site_index
        .pages
        .iter()
        .map(|page| PageEntry {
            url: page_url(base_url, &page.output.to_string_lossy()),
            title: page.title.clone(),
            description: page.description.clone(),
        })
        .collect();
    let template = IndexTemplate {
        site_title: config.site.title.clone(),
        description: config.site.description.clone(),
        base_url: base_url.to_string(),
        items,
    };
    let html = template.render().context("Failed to render index template")?;
    fs::write(output_dir.join("index.html"), html).context("Failed to write index.html")?;
    Ok(())
}
