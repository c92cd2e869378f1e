//! Document rewrite: expand every shortcut link in a document.

use crate::catalog::all_shortcuts;
use crate::document::{Document, LinkMut, Node};
use crate::grammar::{parse_shortcut, GrammarError, Parse, ShortcutRef};
use crate::shortcut::{ShortcutResult, Shortcuts};
use thiserror::Error;

/// Why a single shortcut link could not be expanded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortcutError {
    #[error(transparent)]
    Syntax(#[from] GrammarError),

    #[error("Empty shortcut link title arguments")]
    EmptyTitle,

    #[error("Shortcut title is not a single string element")]
    TitleNotString,

    /// Failure reported by the mapping: an unknown name, a resolver failure,
    /// or one message of a resolver warning.
    #[error("{0}")]
    Resolver(String),
}

/// Error accumulator: records failures and keeps going.
///
/// Unlike `Result`, which stops at the first error, this collects every error
/// seen during a pass and only decides the outcome in [`Collect::finish`].
#[derive(Debug, Default)]
pub struct Collect {
    errors: Vec<ShortcutError>,
}

impl Collect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, error: ShortcutError) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[ShortcutError] {
        &self.errors
    }

    /// `Ok(value)` if nothing was recorded, otherwise every message in order.
    pub fn finish<T>(self, value: T) -> Result<T, Vec<String>> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors.iter().map(ToString::to_string).collect())
        }
    }
}

/// What happened to one link node.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LinkOutcome {
    Unchanged,
    Rewritten(String),
    Failed(Vec<ShortcutError>),
}

/// Expand every shortcut link in `document` using `shortcuts`.
///
/// Links whose target is not shortcut syntax are left alone. All failures in
/// the document are collected; if there are any, the result is the full list
/// of messages and no document.
///
/// # Example
///
/// ```
/// use pulldown_cmark::Parser;
/// use shortlink_core::{apply_shortcuts, Document, ShortcutResult, Shortcuts};
///
/// let shortcuts = Shortcuts::new().with(&["kowainik"], |_tag: Option<&str>, text: &str| {
///     ShortcutResult::Success(format!("https://kowainik.github.io/posts/{text}"))
/// });
/// let doc = Document::from_events(Parser::new("[guide](@kowainik(2019-02-06-style-guide))"));
///
/// let doc = apply_shortcuts(&shortcuts, doc).unwrap();
/// assert_eq!(
///     doc.link_targets(),
///     vec!["https://kowainik.github.io/posts/2019-02-06-style-guide"]
/// );
/// ```
pub fn apply_shortcuts<'a>(
    shortcuts: &Shortcuts,
    mut document: Document<'a>,
) -> Result<Document<'a>, Vec<String>> {
    let mut collect = Collect::new();

    document.walk_links_mut(|mut link| match expand_link(shortcuts, &link) {
        LinkOutcome::Unchanged => {}
        LinkOutcome::Rewritten(url) => {
            tracing::debug!("Expanded shortcut {} -> {}", link.url(), url);
            link.set_url(url);
        }
        LinkOutcome::Failed(errors) => {
            for error in errors {
                tracing::debug!("Broken shortcut {}: {}", link.url(), error);
                collect.record(error);
            }
        }
    });

    collect.finish(document)
}

/// [`apply_shortcuts`] with the built-in catalog.
pub fn apply_all_shortcuts(document: Document<'_>) -> Result<Document<'_>, Vec<String>> {
    apply_shortcuts(all_shortcuts(), document)
}

fn expand_link(shortcuts: &Shortcuts, link: &LinkMut<'_, '_>) -> LinkOutcome {
    let shortcut = match parse_shortcut(link.url()) {
        Parse::NoMatch => return LinkOutcome::Unchanged,
        Parse::Error(err) => return LinkOutcome::Failed(vec![err.into()]),
        Parse::Parsed(shortcut) => shortcut,
    };

    let ShortcutRef { name, tag, text } = shortcut;
    let text = match text {
        Some(text) => text,
        None => match display_text(link.content) {
            Ok(text) => text.to_string(),
            Err(err) => return LinkOutcome::Failed(vec![err]),
        },
    };

    match shortcuts.resolve(&name, tag.as_deref(), &text) {
        ShortcutResult::Success(url) => LinkOutcome::Rewritten(url),
        ShortcutResult::Warning(messages, _) => {
            LinkOutcome::Failed(messages.into_iter().map(ShortcutError::Resolver).collect())
        }
        ShortcutResult::Failure(message) => {
            LinkOutcome::Failed(vec![ShortcutError::Resolver(message)])
        }
    }
}

/// Implicit shortcut text: the link label must be exactly one text run.
fn display_text<'n>(content: &'n [Node<'_>]) -> Result<&'n str, ShortcutError> {
    match content {
        [] => Err(ShortcutError::EmptyTitle),
        [only] => only.plain_text().ok_or(ShortcutError::TitleNotString),
        _ => Err(ShortcutError::TitleNotString),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{Event, LinkType, Parser, Tag, TagEnd};

    fn parse(markdown: &str) -> Document<'_> {
        Document::from_events(Parser::new(markdown))
    }

    fn link_doc<'a>(target: &'a str, content: Vec<Event<'a>>) -> Document<'a> {
        let mut events = vec![
            Event::Start(Tag::Paragraph),
            Event::Start(Tag::Link {
                link_type: LinkType::Inline,
                dest_url: target.into(),
                title: "keep me".into(),
                id: "".into(),
            }),
        ];
        events.extend(content);
        events.push(Event::End(TagEnd::Link));
        events.push(Event::End(TagEnd::Paragraph));
        Document::from_events(events)
    }

    fn github_mapping() -> Shortcuts {
        Shortcuts::new().with(&["github"], |tag: Option<&str>, _text: &str| match tag {
            Some(repo) => ShortcutResult::Success(format!("https://github.com/{repo}")),
            None => ShortcutResult::Failure("github needs a repository".into()),
        })
    }

    fn kowainik_mapping() -> Shortcuts {
        Shortcuts::new().with(&["kowainik"], |_tag: Option<&str>, text: &str| {
            ShortcutResult::Success(format!("https://kowainik.github.io/posts/{text}"))
        })
    }

    fn titles(document: &Document<'_>) -> Vec<String> {
        let mut titles = Vec::new();
        let mut doc = document.clone();
        doc.walk_links_mut(|link| titles.push(link.title.to_string()));
        titles
    }

    #[test]
    fn test_tag_resolves_and_title_is_preserved() {
        let doc = link_doc(
            "@github:kowainik/hakyll-shortcut-links",
            vec![Event::Text("repo".into())],
        );

        let doc = apply_shortcuts(&github_mapping(), doc).unwrap();

        assert_eq!(
            doc.link_targets(),
            vec!["https://github.com/kowainik/hakyll-shortcut-links"]
        );
        assert_eq!(titles(&doc), vec!["keep me"]);
    }

    #[test]
    fn test_explicit_text_overrides_label() {
        let doc = parse("[Style guide](@kowainik(2019-02-06-style-guide))");

        let doc = apply_shortcuts(&kowainik_mapping(), doc).unwrap();

        assert_eq!(
            doc.link_targets(),
            vec!["https://kowainik.github.io/posts/2019-02-06-style-guide"]
        );
    }

    #[test]
    fn test_label_is_used_without_explicit_text() {
        let doc = parse("[2019-02-06-style-guide](@kowainik)");
        let doc = apply_shortcuts(&kowainik_mapping(), doc).unwrap();
        assert_eq!(
            doc.link_targets(),
            vec!["https://kowainik.github.io/posts/2019-02-06-style-guide"]
        );
    }

    #[test]
    fn test_unknown_name() {
        let doc = parse("[x](@unknownname)");
        let errors = apply_shortcuts(&Shortcuts::new(), doc).unwrap_err();
        assert_eq!(errors, vec!["unknown shortcut name 'unknownname'"]);
    }

    #[test]
    fn test_label_split_by_soft_break_is_rejected() {
        let doc = link_doc(
            "@wiki",
            vec![Event::Text("a".into()), Event::SoftBreak, Event::Text("b".into())],
        );
        let errors = apply_shortcuts(&Shortcuts::new(), doc).unwrap_err();
        assert_eq!(errors, vec!["Shortcut title is not a single string element"]);
    }

    #[test]
    fn test_adjacent_text_events_form_one_label() {
        let doc = link_doc("@kowainik", vec![Event::Text("a".into()), Event::Text("b".into())]);
        let doc = apply_shortcuts(&kowainik_mapping(), doc).unwrap();
        assert_eq!(doc.link_targets(), vec!["https://kowainik.github.io/posts/ab"]);
    }

    #[test]
    fn test_formatted_label_is_rejected() {
        let doc = parse("[*emphasis*](@kowainik)");
        let errors = apply_shortcuts(&kowainik_mapping(), doc).unwrap_err();
        assert_eq!(errors, vec!["Shortcut title is not a single string element"]);
    }

    #[test]
    fn test_empty_label_is_rejected() {
        let doc = link_doc("@kowainik", vec![]);
        let errors = apply_shortcuts(&kowainik_mapping(), doc).unwrap_err();
        assert_eq!(errors, vec!["Empty shortcut link title arguments"]);
    }

    #[test]
    fn test_explicit_text_allows_any_label() {
        let doc = parse("[*fancy* label](@kowainik(post))");
        let doc = apply_shortcuts(&kowainik_mapping(), doc).unwrap();
        assert_eq!(doc.link_targets(), vec!["https://kowainik.github.io/posts/post"]);
    }

    #[test]
    fn test_ordinary_links_pass_through() {
        let doc = parse("[site](notashortcut.com) and [mail](mailto:me@example.com)");
        let before = doc.clone();

        let after = apply_shortcuts(&Shortcuts::new(), doc).unwrap();

        assert_eq!(after, before);
    }

    #[test]
    fn test_document_without_shortcuts_is_unchanged() {
        let doc = parse("# Heading\n\nPlain *text*, `code`, and ![img](a.png).\n");
        let before = doc.clone();
        assert_eq!(apply_all_shortcuts(doc).unwrap(), before);
    }

    #[test]
    fn test_every_error_is_collected() {
        let doc = parse(
            "[a](@nope) then [b](@) then [*c*](@kowainik) then [ok](@kowainik) then [d](@x(1)(2))",
        );

        let errors = apply_shortcuts(&kowainik_mapping(), doc).unwrap_err();

        assert_eq!(
            errors,
            vec![
                "unknown shortcut name 'nope'".to_string(),
                "empty shortcut name".to_string(),
                "Shortcut title is not a single string element".to_string(),
                "shortcut link has more than one parenthesized group".to_string(),
            ]
        );
    }

    #[test]
    fn test_errors_span_blocks() {
        let doc = parse("[a](@one)\n\n- [b](@two)\n- [c](@three)\n\n> [d](@four)\n");
        let errors = apply_shortcuts(&Shortcuts::new(), doc).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_warning_is_a_failure() {
        let shortcuts = Shortcuts::new().with(&["warn"], |_tag: Option<&str>, _text: &str| {
            ShortcutResult::Warning(
                vec!["first caveat".into(), "second caveat".into()],
                "https://partial".into(),
            )
        });
        let doc = parse("[x](@warn)");

        let errors = apply_shortcuts(&shortcuts, doc).unwrap_err();

        assert_eq!(errors, vec!["first caveat", "second caveat"]);
    }

    #[test]
    fn test_resolver_failure_message_is_reported() {
        let doc = link_doc("@github", vec![Event::Text("repo".into())]);
        let errors = apply_shortcuts(&github_mapping(), doc).unwrap_err();
        assert_eq!(errors, vec!["github needs a repository"]);
    }

    #[test]
    fn test_catalog_owner_path_tag() {
        let doc = parse("[repo](@github:kowainik/hakyll-shortcut-links) and [relude](@gh:kowainik)");
        let doc = apply_all_shortcuts(doc).unwrap();
        assert_eq!(
            doc.link_targets(),
            vec![
                "https://github.com/kowainik/hakyll-shortcut-links/repo",
                "https://github.com/kowainik/relude"
            ]
        );
    }

    #[test]
    fn test_catalog_entry_point() {
        let doc = parse("[serde](@crates) and [Rust](@w)");
        let doc = apply_all_shortcuts(doc).unwrap();
        assert_eq!(
            doc.link_targets(),
            vec![
                "https://crates.io/crates/serde",
                "https://en.wikipedia.org/wiki/Rust"
            ]
        );
    }

    #[test]
    fn test_shortcut_inside_image_label_link() {
        let doc = parse("[![logo](logo.png)](@kowainik(about))");
        let doc = apply_shortcuts(&kowainik_mapping(), doc).unwrap();
        assert_eq!(
            doc.link_targets(),
            vec!["https://kowainik.github.io/posts/about"]
        );
    }

    #[test]
    fn test_collect_keeps_order() {
        let mut collect = Collect::new();
        collect.record(ShortcutError::EmptyTitle);
        collect.record(ShortcutError::Resolver("later".into()));
        assert_eq!(collect.errors().len(), 2);
        assert_eq!(
            collect.finish(()),
            Err(vec![
                "Empty shortcut link title arguments".to_string(),
                "later".to_string()
            ])
        );
    }
}
