//! Shortcuts declared in site configuration as URL templates.
//!
//! ```yaml
//! shortcuts:
//!   - names: [kowainik]
//!     url: "https://kowainik.github.io/posts/{text}"
//!   - names: [issue, i]
//!     url: "https://github.com/{tag}/issues/{text}"
//!     default_tag: kowainik/relude
//! ```

use crate::shortcut::{ShortcutResult, Shortcuts};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static PLACEHOLDER: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"\{([^{}]*)\}").expect("valid regex"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template shortcut has no names")]
    NoNames,

    #[error("template shortcut '{name}' uses unknown placeholder '{{{placeholder}}}'")]
    UnknownPlaceholder { name: String, placeholder: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateShortcut {
    pub names: Vec<String>,
    pub url: String,
    #[serde(default)]
    pub default_tag: Option<String>,
}

impl TemplateShortcut {
    fn primary_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or("")
    }

    /// Reject templates with no names or placeholders other than
    /// `{text}` and `{tag}`.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.names.iter().all(|n| n.trim().is_empty()) {
            return Err(TemplateError::NoNames);
        }
        for capture in PLACEHOLDER.captures_iter(&self.url) {
            let placeholder = &capture[1];
            if placeholder != "text" && placeholder != "tag" {
                return Err(TemplateError::UnknownPlaceholder {
                    name: self.primary_name().to_string(),
                    placeholder: placeholder.to_string(),
                });
            }
        }
        Ok(())
    }

    fn uses_tag(&self) -> bool {
        PLACEHOLDER.captures_iter(&self.url).any(|c| &c[1] == "tag")
    }

    /// Substitute the placeholders. Values are inserted as written.
    pub fn expand(&self, tag: Option<&str>, text: &str) -> ShortcutResult {
        let tag = tag
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .or(self.default_tag.as_deref());

        if self.uses_tag() && tag.is_none() {
            return ShortcutResult::Failure(format!(
                "shortcut '{}' requires an option",
                self.primary_name()
            ));
        }

        let url = PLACEHOLDER.replace_all(&self.url, |c: &regex::Captures<'_>| match &c[1] {
            "tag" => tag.unwrap_or_default().to_string(),
            _ => text.to_string(),
        });
        ShortcutResult::Success(url.into_owned())
    }
}

/// Build a mapping from validated templates.
pub fn template_shortcuts(templates: &[TemplateShortcut]) -> Result<Shortcuts, TemplateError> {
    let mut shortcuts = Shortcuts::new();
    for template in templates {
        template.validate()?;
        let names = template
            .names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect();
        let owned = template.clone();
        shortcuts.insert(
            names,
            std::sync::Arc::new(move |tag: Option<&str>, text: &str| owned.expand(tag, text)),
        );
    }
    Ok(shortcuts)
}
