//! # shortlink-render
//!
//! Page templates for shortlink site builds, rendered with Askama.

pub mod templates;

pub use templates::{page_url, IndexTemplate, PageEntry, PageTemplate};
