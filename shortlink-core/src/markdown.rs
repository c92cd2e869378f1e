//! Markdown reading and HTML writing around the document tree.

use crate::document::{Document, Node};
use once_cell::sync::Lazy;
use pulldown_cmark::{html, CowStr, Options, Parser, Tag};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Markdown extensions enabled when reading a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    pub tables: bool,
    pub footnotes: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
    pub heading_attributes: bool,
    pub smart_punctuation: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            tasklists: true,
            heading_attributes: true,
            smart_punctuation: false,
        }
    }
}

impl ReaderOptions {
    pub fn to_options(&self) -> Options {
        let mut options = Options::empty();
        let flags = [
            (self.tables, Options::ENABLE_TABLES),
            (self.footnotes, Options::ENABLE_FOOTNOTES),
            (self.strikethrough, Options::ENABLE_STRIKETHROUGH),
            (self.tasklists, Options::ENABLE_TASKLISTS),
            (self.heading_attributes, Options::ENABLE_HEADING_ATTRIBUTES),
            (self.smart_punctuation, Options::ENABLE_SMART_PUNCTUATION),
        ];
        for (enabled, flag) in flags {
            if enabled {
                options.insert(flag);
            }
        }
        options
    }
}

/// HTML output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Give headings without an explicit `{#id}` a slug id.
    pub heading_ids: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self { heading_ids: true }
    }
}

/// Parse markdown into a document tree.
pub fn read_document<'a>(markdown: &'a str, options: &ReaderOptions) -> Document<'a> {
    Document::from_events(Parser::new_ext(markdown, options.to_options()))
}

/// Render a document tree to HTML.
pub fn write_html(mut document: Document<'_>, options: &WriterOptions) -> String {
    if options.heading_ids {
        attach_heading_ids(&mut document);
    }
    let mut out = String::new();
    html::push_html(&mut out, document.into_events().into_iter());
    out
}

/// Fill in missing heading ids; a slug already in use gets the first free
/// numeric suffix.
fn attach_heading_ids(document: &mut Document<'_>) {
    let mut used: HashSet<String> = HashSet::new();
    document.walk_mut(&mut |node: &mut Node<'_>| {
        let Node::Element {
            tag: Tag::Heading { id, .. },
            children,
            ..
        } = node
        else {
            return;
        };
        if let Some(explicit) = id {
            used.insert(explicit.to_string());
            return;
        }

        let text: String = children.iter().map(Node::text_content).collect();
        let base = heading_slug(&text);
        if base.is_empty() {
            return;
        }
        let mut slug = base.clone();
        let mut n = 1;
        while used.contains(&slug) {
            slug = format!("{base}-{n}");
            n += 1;
        }
        used.insert(slug.clone());
        *id = Some(CowStr::from(slug));
    });
}

static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").expect("valid regex"));

/// Lowercase, hyphenate whitespace and underscores, drop punctuation.
fn heading_slug(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .graphemes(true)
        .filter_map(|g| match g {
            " " | "_" | "\t" | "\n" | "-" => Some("-"),
            _ if g.chars().next().is_some_and(char::is_alphanumeric) => Some(g),
            _ => None,
        })
        .collect();
    HYPHEN_RUNS
        .replace_all(&kept, "-")
        .trim_matches('-')
        .to_string()
}
