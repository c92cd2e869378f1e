//! # shortlink-core
//!
//! Core library for the shortlink site compiler.
//!
//! Markdown links whose target starts with `@` are shortcuts:
//! `[relude](@github:kowainik)` becomes a link to
//! `https://github.com/kowainik/relude`. This crate parses that syntax,
//! rewrites every shortcut in a document (collecting all failures rather
//! than stopping at the first), ships a built-in catalog, and wires the
//! rewrite into a markdown-to-HTML compiler and a site builder.

pub mod builder;
pub mod catalog;
pub mod compiler;
pub mod config;
pub mod custom;
pub mod document;
pub mod frontmatter;
pub mod grammar;
pub mod markdown;
pub mod models;
pub mod rewrite;
pub mod shortcut;

pub use builder::{BuildError, PageOutcome, SiteBuilder};
pub use catalog::{all_shortcuts, ALL_SHORTCUTS};
pub use compiler::{
    default_compiler, shortcut_compiler, shortcut_compiler_with, CompileError, CompilerOptions,
    PageCompiler,
};
pub use config::{Config, ConfigError};
pub use custom::{template_shortcuts, TemplateShortcut};
pub use document::Document;
pub use grammar::{parse_shortcut, GrammarError, Parse, ShortcutRef};
pub use markdown::{read_document, write_html, ReaderOptions, WriterOptions};
pub use models::{Diagnostic, Frontmatter, Page, SiteIndex};
pub use rewrite::{apply_all_shortcuts, apply_shortcuts, Collect, ShortcutError};
pub use shortcut::{Shortcut, ShortcutResult, Shortcuts};
