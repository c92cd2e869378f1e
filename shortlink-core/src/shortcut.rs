//! Shortcut resolvers and the ordered table that maps names to them.

use std::fmt;
use std::sync::Arc;

/// Outcome of resolving a single shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutResult {
    Success(String),
    /// A usable URL, but with caveats attached.
    Warning(Vec<String>, String),
    Failure(String),
}

impl ShortcutResult {
    /// Strict view: warnings count as failures and their URL is dropped.
    pub fn into_strict(self) -> Result<String, Vec<String>> {
        match self {
            ShortcutResult::Success(url) => Ok(url),
            ShortcutResult::Warning(messages, _) => Err(messages),
            ShortcutResult::Failure(message) => Err(vec![message]),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ShortcutResult::Success(_))
    }
}

/// A resolver: optional tag plus display text in, URL out.
pub type Shortcut = Arc<dyn Fn(Option<&str>, &str) -> ShortcutResult + Send + Sync>;

/// Ordered table of `(aliases, resolver)` entries.
///
/// Names may repeat across entries; lookup takes the first entry listing the
/// name, so earlier entries shadow later ones.
#[derive(Clone, Default)]
pub struct Shortcuts {
    entries: Vec<(Vec<String>, Shortcut)>,
}

impl Shortcuts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Shortcuts::insert`].
    pub fn with<F>(mut self, names: &[&str], resolver: F) -> Self
    where
        F: Fn(Option<&str>, &str) -> ShortcutResult + Send + Sync + 'static,
    {
        self.insert(names.iter().map(|n| n.to_string()).collect(), Arc::new(resolver));
        self
    }

    /// Append an entry after all existing ones.
    pub fn insert(&mut self, names: Vec<String>, resolver: Shortcut) {
        self.entries.push((names, resolver));
    }

    /// Append every entry of `other`, keeping its order.
    pub fn extend_from(&mut self, other: &Shortcuts) {
        self.entries.extend(other.entries.iter().cloned());
    }

    /// First resolver whose aliases contain `name`.
    pub fn get(&self, name: &str) -> Option<&Shortcut> {
        self.entries
            .iter()
            .find(|(names, _)| names.iter().any(|n| n == name))
            .map(|(_, resolver)| resolver)
    }

    /// Look up `name` and run its resolver.
    ///
    /// An unknown name is reported as a [`ShortcutResult::Failure`], the same
    /// way a resolver reports its own failures.
    pub fn resolve(&self, name: &str, tag: Option<&str>, text: &str) -> ShortcutResult {
        match self.get(name) {
            Some(resolver) => resolver(tag, text),
            None => ShortcutResult::Failure(format!("unknown shortcut name '{name}'")),
        }
    }

    /// Alias lists in table order.
    pub fn names(&self) -> impl Iterator<Item = &[String]> {
        self.entries.iter().map(|(names, _)| names.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Shortcuts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(url: &'static str) -> impl Fn(Option<&str>, &str) -> ShortcutResult {
        move |_tag: Option<&str>, _text: &str| ShortcutResult::Success(url.to_string())
    }

    #[test]
    fn test_first_entry_wins() {
        let shortcuts = Shortcuts::new()
            .with(&["gh", "github"], constant("first"))
            .with(&["github"], constant("second"));

        assert_eq!(
            shortcuts.resolve("github", None, "x"),
            ShortcutResult::Success("first".into())
        );
        assert_eq!(
            shortcuts.resolve("gh", None, "x"),
            ShortcutResult::Success("first".into())
        );
    }

    #[test]
    fn test_unknown_name_fails() {
        let shortcuts = Shortcuts::new();
        assert_eq!(
            shortcuts.resolve("nope", None, "x"),
            ShortcutResult::Failure("unknown shortcut name 'nope'".into())
        );
    }

    #[test]
    fn test_resolver_receives_tag_and_text() {
        let shortcuts = Shortcuts::new().with(&["echo"], |tag: Option<&str>, text: &str| {
            ShortcutResult::Success(format!("{}|{text}", tag.unwrap_or("-")))
        });
        assert_eq!(
            shortcuts.resolve("echo", Some("t"), "body"),
            ShortcutResult::Success("t|body".into())
        );
        assert_eq!(
            shortcuts.resolve("echo", None, "body"),
            ShortcutResult::Success("-|body".into())
        );
    }

    #[test]
    fn test_extend_keeps_earlier_entries_in_front() {
        let mut shortcuts = Shortcuts::new().with(&["a"], constant("mine"));
        shortcuts.extend_from(&Shortcuts::new().with(&["a", "b"], constant("theirs")));

        assert_eq!(shortcuts.len(), 2);
        assert_eq!(
            shortcuts.resolve("a", None, ""),
            ShortcutResult::Success("mine".into())
        );
        assert_eq!(
            shortcuts.resolve("b", None, ""),
            ShortcutResult::Success("theirs".into())
        );
    }

    #[test]
    fn test_strict_view_drops_warning_url() {
        let warned = ShortcutResult::Warning(vec!["careful".into()], "https://x".into());
        assert_eq!(warned.into_strict(), Err(vec!["careful".to_string()]));
    }
}
