//! Configuration parsing and management.

use crate::catalog::all_shortcuts;
use crate::compiler::{shortcut_compiler_with, CompilerOptions, PageCompiler};
use crate::custom::{template_shortcuts, TemplateError, TemplateShortcut};
use crate::markdown::{ReaderOptions, WriterOptions};
use crate::shortcut::Shortcuts;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid ignore pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid shortcut template: {0}")]
    Template(#[from] TemplateError),
}

/// Main configuration struct matching the shortlink.yml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Regexes matched against paths relative to the source directory.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    #[serde(default)]
    pub markdown: ReaderOptions,

    #[serde(default)]
    pub html: WriterOptions,

    /// Template shortcuts; these shadow catalog entries of the same name.
    #[serde(default)]
    pub shortcuts: Vec<TemplateShortcut>,

    #[serde(default = "default_true")]
    pub builtin_shortcuts: bool,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

fn default_base_url() -> String {
    String::from("/")
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_source")]
    pub source: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_source() -> PathBuf {
    PathBuf::from("content")
}

fn default_output() -> PathBuf {
    PathBuf::from("site")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: default_output(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Parse and validate configuration text. Paths stay relative to the
    /// working directory.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.ignore_regexes()?;
        for template in &config.shortcuts {
            template.validate()?;
        }
        Ok(config)
    }

    /// Get the source directory, resolved relative to config file
    pub fn source_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.source)
    }

    /// Get the output directory, resolved relative to config file
    pub fn output_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.output)
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.config_path.as_deref().and_then(Path::parent) {
            Some(parent) => parent.join(path),
            None => path.to_path_buf(),
        }
    }

    pub fn ignore_regexes(&self) -> Result<Vec<Regex>, ConfigError> {
        self.ignore_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect()
    }

    /// Configured templates first, then the catalog (unless disabled).
    pub fn shortcuts(&self) -> Result<Shortcuts, ConfigError> {
        let mut shortcuts = template_shortcuts(&self.shortcuts)?;
        if self.builtin_shortcuts {
            shortcuts.extend_from(all_shortcuts());
        }
        Ok(shortcuts)
    }

    pub fn compiler_options(&self) -> CompilerOptions {
        CompilerOptions {
            reader: self.markdown.clone(),
            writer: self.html.clone(),
        }
    }

    /// Shortcut-expanding compiler for this site.
    pub fn compiler(&self) -> Result<PageCompiler, ConfigError> {
        Ok(shortcut_compiler_with(
            self.compiler_options(),
            self.shortcuts()?,
        ))
    }

    /// Normalized base URL with leading and trailing slash ("/foo/" or "/")
    pub fn normalized_base_url(&self) -> String {
        normalize_base_url(&self.base_url)
    }
}

/// Ensure base URLs have a leading and trailing slash
pub fn normalize_base_url(raw: &str) -> String {
    let parts: Vec<&str> = raw.trim().split('/').filter(|s| !s.is_empty()).collect();
    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", parts.join("/"))
    }
}
