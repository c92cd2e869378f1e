//! Content model: pages, their frontmatter, and build diagnostics.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// YAML frontmatter at the top of a page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Frontmatter {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub draft: bool,

    /// `shortcuts: false` compiles the page with the plain compiler.
    #[serde(default = "default_true")]
    pub shortcuts: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Frontmatter {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            draft: false,
            shortcuts: true,
        }
    }
}

/// A compiled page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Path of the markdown file relative to the source directory.
    pub source: PathBuf,
    /// Path of the HTML file relative to the output directory.
    pub output: PathBuf,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Rendered body, without the page template.
    pub content_html: String,
}

/// One shortcut error found while building, tied to the page it came from.
///
/// There is no warning tier: a resolver warning fails its page like any
/// other error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub page: PathBuf,
    pub message: String,
}

impl Diagnostic {
    pub fn error(page: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: error: {}", self.page.display(), self.message)
    }
}

/// Everything one build produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteIndex {
    pub pages: Vec<Page>,
    pub diagnostics: Vec<Diagnostic>,
    /// Drafts and ignored files, relative to the source directory.
    pub skipped: Vec<PathBuf>,
}

impl SiteIndex {
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}
