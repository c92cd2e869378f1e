//! Parser for the shortcut link syntax `@name[:tag][(text)]`.

use std::fmt;
use thiserror::Error;

/// Character that introduces a shortcut link target.
pub const INTRODUCER: char = '@';

/// A parsed shortcut link target.
///
/// `tag: None` means no option was written; `Some("")` is an explicit empty
/// option (`@name:`). The same distinction applies to `text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortcutRef {
    pub name: String,
    pub tag: Option<String>,
    pub text: Option<String>,
}

impl fmt::Display for ShortcutRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{INTRODUCER}{}", self.name)?;
        if let Some(tag) = &self.tag {
            write!(f, ":{tag}")?;
        }
        if let Some(text) = &self.text {
            write!(f, "({text})")?;
        }
        Ok(())
    }
}

/// Malformed shortcut syntax.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("empty shortcut name")]
    EmptyName,

    #[error("unexpected ')' without a matching '(' in shortcut link")]
    UnexpectedCloseParen,

    #[error("unclosed '(' in shortcut link")]
    UnclosedParen,

    #[error("shortcut link has more than one parenthesized group")]
    MultipleGroups,

    #[error("unexpected text '{0}' after ')' in shortcut link")]
    TrailingText(String),
}

/// Outcome of examining a link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parse {
    /// Not a shortcut; the link is an ordinary one.
    NoMatch,
    /// Looks like a shortcut but is malformed.
    Error(GrammarError),
    Parsed(ShortcutRef),
}

/// Parse a link target as a shortcut.
///
/// Single left-to-right pass, no backtracking. Every input yields exactly one
/// of the three [`Parse`] outcomes.
///
/// # Example
///
/// ```
/// use shortlink_core::grammar::{parse_shortcut, Parse, ShortcutRef};
///
/// assert_eq!(
///     parse_shortcut("@hackage:lts(base)"),
///     Parse::Parsed(ShortcutRef {
///         name: "hackage".into(),
///         tag: Some("lts".into()),
///         text: Some("base".into()),
///     })
/// );
/// assert_eq!(parse_shortcut("https://example.com"), Parse::NoMatch);
/// ```
pub fn parse_shortcut(target: &str) -> Parse {
    let Some(rest) = target.strip_prefix(INTRODUCER) else {
        return Parse::NoMatch;
    };

    let name_end = rest.find([':', '(', ')']).unwrap_or(rest.len());
    let (name, rest) = rest.split_at(name_end);
    if name.is_empty() {
        return Parse::Error(GrammarError::EmptyName);
    }

    let (tag, rest) = match rest.strip_prefix(':') {
        Some(after) => {
            let tag_end = after.find(['(', ')']).unwrap_or(after.len());
            let (tag, rest) = after.split_at(tag_end);
            (Some(tag), rest)
        }
        None => (None, rest),
    };

    let text = match parse_group(rest) {
        Ok(text) => text,
        Err(err) => return Parse::Error(err),
    };

    Parse::Parsed(ShortcutRef {
        name: name.to_string(),
        tag: tag.map(str::to_string),
        text: text.map(str::to_string),
    })
}

/// Parse the optional `(text)` suffix. `rest` is empty or starts with a paren.
fn parse_group(rest: &str) -> Result<Option<&str>, GrammarError> {
    if rest.is_empty() {
        return Ok(None);
    }
    let Some(inner) = rest.strip_prefix('(') else {
        return Err(GrammarError::UnexpectedCloseParen);
    };
    let Some((text, trailing)) = inner.split_once(')') else {
        return Err(GrammarError::UnclosedParen);
    };

    if trailing.starts_with('(') {
        Err(GrammarError::MultipleGroups)
    } else if !trailing.is_empty() {
        Err(GrammarError::TrailingText(trailing.to_string()))
    } else {
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parsed(name: &str, tag: Option<&str>, text: Option<&str>) -> Parse {
        Parse::Parsed(ShortcutRef {
            name: name.to_string(),
            tag: tag.map(str::to_string),
            text: text.map(str::to_string),
        })
    }

    #[test]
    fn test_name_only() {
        assert_eq!(parse_shortcut("@github"), parsed("github", None, None));
    }

    #[test]
    fn test_name_and_tag() {
        assert_eq!(
            parse_shortcut("@github:kowainik/hakyll-shortcut-links"),
            parsed("github", Some("kowainik/hakyll-shortcut-links"), None)
        );
    }

    #[test]
    fn test_explicit_text_without_tag() {
        assert_eq!(
            parse_shortcut("@kowainik(2019-02-06-style-guide)"),
            parsed("kowainik", None, Some("2019-02-06-style-guide"))
        );
    }

    #[test]
    fn test_all_fields() {
        assert_eq!(
            parse_shortcut("@w:fr(Tour Eiffel)"),
            parsed("w", Some("fr"), Some("Tour Eiffel"))
        );
    }

    #[test]
    fn test_empty_tag_differs_from_missing_tag() {
        assert_eq!(parse_shortcut("@npm:"), parsed("npm", Some(""), None));
        assert_eq!(parse_shortcut("@npm"), parsed("npm", None, None));
        assert_ne!(parse_shortcut("@npm:"), parse_shortcut("@npm"));
    }

    #[test]
    fn test_tag_may_contain_colons() {
        assert_eq!(
            parse_shortcut("@docker:a:b(c)"),
            parsed("docker", Some("a:b"), Some("c"))
        );
    }

    #[test]
    fn test_empty_explicit_text() {
        assert_eq!(parse_shortcut("@g()"), parsed("g", None, Some("")));
    }

    #[test]
    fn test_no_introducer_is_no_match() {
        assert_eq!(parse_shortcut("notashortcut.com"), Parse::NoMatch);
        assert_eq!(parse_shortcut(""), Parse::NoMatch);
        assert_eq!(parse_shortcut("mailto:me@example.com"), Parse::NoMatch);
    }

    #[test]
    fn test_empty_name() {
        for target in ["@", "@:tag", "@(text)", "@)"] {
            assert_eq!(
                parse_shortcut(target),
                Parse::Error(GrammarError::EmptyName),
                "{target}"
            );
        }
        assert_eq!(GrammarError::EmptyName.to_string(), "empty shortcut name");
    }

    #[test]
    fn test_malformed_parens() {
        assert_eq!(
            parse_shortcut("@name)"),
            Parse::Error(GrammarError::UnexpectedCloseParen)
        );
        assert_eq!(
            parse_shortcut("@name:tag(text"),
            Parse::Error(GrammarError::UnclosedParen)
        );
        assert_eq!(
            parse_shortcut("@name(a)(b)"),
            Parse::Error(GrammarError::MultipleGroups)
        );
        assert_eq!(
            parse_shortcut("@name(a)b"),
            Parse::Error(GrammarError::TrailingText("b".into()))
        );
    }

    #[test]
    fn test_open_paren_inside_text_is_kept() {
        assert_eq!(
            parse_shortcut("@name(f(x)"),
            parsed("name", None, Some("f(x"))
        );
    }

    fn shortcut_ref() -> impl Strategy<Value = ShortcutRef> {
        (
            "[^:()]{1,12}",
            proptest::option::of("[^()]{0,12}"),
            proptest::option::of("[^)]{0,12}"),
        )
            .prop_map(|(name, tag, text)| ShortcutRef { name, tag, text })
    }

    proptest! {
        #[test]
        fn prop_no_match_iff_no_introducer(s in ".{0,24}") {
            let outcome = parse_shortcut(&s);
            prop_assert_eq!(outcome == Parse::NoMatch, !s.starts_with(INTRODUCER));
        }

        #[test]
        fn prop_display_round_trips(r in shortcut_ref()) {
            prop_assert_eq!(parse_shortcut(&r.to_string()), Parse::Parsed(r));
        }
    }
}
