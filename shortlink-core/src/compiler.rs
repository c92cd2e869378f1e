//! Page compilers: markdown in, HTML out, optionally expanding shortcuts.
//!
//! [`default_compiler`] is the plain markdown compiler. The shortcut
//! variants take the same options and slot in where it was used, adding the
//! rewrite step between reading and writing.

use crate::catalog::all_shortcuts;
use crate::markdown::{read_document, write_html, ReaderOptions, WriterOptions};
use crate::rewrite::apply_shortcuts;
use crate::shortcut::Shortcuts;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Every shortcut message from the page, in document order.
    #[error("{}", .0.join("\n"))]
    Shortcuts(Vec<String>),
}

impl CompileError {
    pub fn messages(&self) -> &[String] {
        match self {
            CompileError::Shortcuts(messages) => messages,
        }
    }
}

/// Reader and writer settings shared by every compiler variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerOptions {
    #[serde(default)]
    pub reader: ReaderOptions,
    #[serde(default)]
    pub writer: WriterOptions,
}

#[derive(Clone)]
enum Expansion {
    None,
    Builtin,
    Custom(Arc<Shortcuts>),
}

#[derive(Clone)]
pub struct PageCompiler {
    options: CompilerOptions,
    expansion: Expansion,
}

/// Plain markdown to HTML; `@` links are left alone.
pub fn default_compiler(options: CompilerOptions) -> PageCompiler {
    PageCompiler {
        options,
        expansion: Expansion::None,
    }
}

/// Expand shortcuts against the built-in catalog.
pub fn shortcut_compiler(options: CompilerOptions) -> PageCompiler {
    PageCompiler {
        options,
        expansion: Expansion::Builtin,
    }
}

/// Expand shortcuts against a caller-supplied mapping.
pub fn shortcut_compiler_with(options: CompilerOptions, shortcuts: Shortcuts) -> PageCompiler {
    PageCompiler {
        options,
        expansion: Expansion::Custom(Arc::new(shortcuts)),
    }
}

impl PageCompiler {
    /// The mapping used for expansion, if any.
    pub fn shortcuts(&self) -> Option<&Shortcuts> {
        match &self.expansion {
            Expansion::None => None,
            Expansion::Builtin => Some(all_shortcuts()),
            Expansion::Custom(shortcuts) => Some(shortcuts.as_ref()),
        }
    }

    pub fn compile(&self, markdown: &str) -> Result<String, CompileError> {
        let document = read_document(markdown, &self.options.reader);
        let document = match self.shortcuts() {
            Some(shortcuts) => {
                apply_shortcuts(shortcuts, document).map_err(CompileError::Shortcuts)?
            }
            None => document,
        };
        Ok(write_html(document, &self.options.writer))
    }
}

impl std::fmt::Debug for PageCompiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let expansion = match &self.expansion {
            Expansion::None => "none",
            Expansion::Builtin => "builtin",
            Expansion::Custom(_) => "custom",
        };
        f.debug_struct("PageCompiler")
            .field("options", &self.options)
            .field("expansion", &expansion)
            .finish()
    }
}
