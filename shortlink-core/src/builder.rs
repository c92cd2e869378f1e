//! Site building logic - discovers pages, compiles them, and collects
//! diagnostics. Writing the output is left to the caller.

use crate::{
    compiler::{default_compiler, PageCompiler},
    config::{Config, ConfigError},
    frontmatter::parse_frontmatter,
    models::*,
};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Source directory not found: {}", .0.display())]
    MissingSource(PathBuf),
}

/// Main site builder
pub struct SiteBuilder {
    config: Config,
    compiler: PageCompiler,
    plain: PageCompiler,
    ignores: Vec<Regex>,
}

impl SiteBuilder {
    pub fn new(config: Config) -> Result<Self, BuildError> {
        let compiler = config.compiler()?;
        let plain = default_compiler(config.compiler_options());
        let ignores = config.ignore_regexes()?;
        Ok(Self {
            config,
            compiler,
            plain,
            ignores,
        })
    }

    /// Compile every page under the source directory.
    ///
    /// A page that fails contributes diagnostics and no output; the rest of
    /// the site still builds.
    pub fn build(&self) -> Result<SiteIndex, BuildError> {
        let source_dir = self.config.source_dir();
        if !source_dir.is_dir() {
            return Err(BuildError::MissingSource(source_dir));
        }

        let (files, mut skipped) = self.discover_markdown_files(&source_dir);
        tracing::info!("Found {} markdown files", files.len());

        let mut index = SiteIndex::default();
        for rel in files {
            let content = fs::read_to_string(source_dir.join(&rel))?;
            match self.compile_page(&rel, &content) {
                PageOutcome::Built(page) => index.pages.push(page),
                PageOutcome::Draft => {
                    tracing::debug!("Skipping draft {}", rel.display());
                    skipped.push(rel);
                }
                PageOutcome::Failed(mut diagnostics) => {
                    tracing::warn!(
                        "{} failed with {} error(s)",
                        rel.display(),
                        diagnostics.len()
                    );
                    index.diagnostics.append(&mut diagnostics);
                }
            }
        }
        index.skipped = skipped;

        tracing::info!(
            "Compiled {} pages, {} errors",
            index.pages.len(),
            index.error_count()
        );
        Ok(index)
    }

    /// Compile a single page given its path relative to the source directory.
    pub fn compile_page(&self, rel: &Path, content: &str) -> PageOutcome {
        let (frontmatter, body) = match parse_frontmatter(content) {
            Ok(parsed) => parsed,
            Err(e) => return PageOutcome::Failed(vec![Diagnostic::error(rel, e.to_string())]),
        };
        if frontmatter.draft {
            return PageOutcome::Draft;
        }

        let compiler = if frontmatter.shortcuts {
            &self.compiler
        } else {
            &self.plain
        };
        match compiler.compile(body) {
            Ok(content_html) => PageOutcome::Built(Page {
                source: rel.to_path_buf(),
                output: rel.with_extension("html"),
                title: frontmatter.title.unwrap_or_else(|| page_title(rel)),
                description: frontmatter.description,
                content_html,
            }),
            Err(e) => PageOutcome::Failed(
                e.messages()
                    .iter()
                    .map(|message| Diagnostic::error(rel, message.clone()))
                    .collect(),
            ),
        }
    }

    /// Markdown files (relative, sorted) and the ones skipped by ignore patterns.
    fn discover_markdown_files(&self, source_dir: &Path) -> (Vec<PathBuf>, Vec<PathBuf>) {
        let mut files = Vec::new();
        let mut ignored = Vec::new();

        for entry in WalkDir::new(source_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if entry.path().extension().map_or(true, |ext| ext != "md") {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(source_dir)
                .unwrap_or(entry.path())
                .to_path_buf();
            let rel_str = rel.to_string_lossy();
            if self.ignores.iter().any(|re| re.is_match(&rel_str)) {
                tracing::debug!("Ignoring {} due to ignore_patterns", rel_str);
                ignored.push(rel);
                continue;
            }
            files.push(rel);
        }

        (files, ignored)
    }
}

#[derive(Debug)]
pub enum PageOutcome {
    Built(Page),
    Draft,
    Failed(Vec<Diagnostic>),
}

fn page_title(rel: &Path) -> String {
    rel.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
