//! Askama template definitions.

use askama::Template;

/// A page entry for the index listing
#[derive(Debug, Clone)]
pub struct PageEntry {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
}

/// Compiled page template
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    // Page metadata
    pub title: String,
    pub description: Option<String>,

    /// Compiled HTML body, inserted unescaped.
    pub content: String,

    // Site metadata
    pub site_title: String,
    pub base_url: String,
}

/// Index page template
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site_title: String,
    /// Site description, used for the meta tag.
    pub description: Option<String>,
    pub base_url: String,
    pub items: Vec<PageEntry>,
}

/// Link to a page's output file under `base_url` (normalised, ends in `/`).
pub fn page_url(base_url: &str, output: &str) -> String {
    let output = output.replace('\\', "/");
    format!("{}{}", base_url, output.trim_start_matches('/'))
}
