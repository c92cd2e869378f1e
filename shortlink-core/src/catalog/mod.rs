//! Built-in catalog of shortcuts.
//!
//! Every entry is an alias list and a resolver. Resolvers come in two
//! flavours: [`plain`] ones ignore the tag (and warn when one is given),
//! [`tagged`] ones read it.

mod dev;
mod general;

use crate::shortcut::{ShortcutResult, Shortcuts};
use once_cell::sync::Lazy;
use url::Url;

/// The full catalog, constructed once.
pub static ALL_SHORTCUTS: Lazy<Shortcuts> = Lazy::new(build_catalog);

/// Shared handle to [`ALL_SHORTCUTS`].
pub fn all_shortcuts() -> &'static Shortcuts {
    &ALL_SHORTCUTS
}

fn build_catalog() -> Shortcuts {
    Shortcuts::new()
        // General
        .with(&["wikipedia", "w"], tagged("wikipedia", general::wikipedia))
        .with(&["google", "g"], plain("google", general::google))
        .with(&["duckduckgo", "ddg"], plain("duckduckgo", general::duckduckgo))
        .with(&["youtube", "yt"], plain("youtube", general::youtube))
        .with(&["twitter"], plain("twitter", general::twitter))
        .with(&["reddit"], plain("reddit", general::reddit))
        .with(&["stackoverflow", "so"], plain("stackoverflow", general::stackoverflow))
        .with(&["arxiv"], plain("arxiv", general::arxiv))
        .with(&["doi"], plain("doi", general::doi))
        .with(&["rfc"], plain("rfc", general::rfc))
        // Code hosting
        .with(&["github", "gh"], tagged("github", dev::github))
        .with(&["gitlab"], tagged("gitlab", dev::gitlab))
        .with(&["bitbucket"], tagged("bitbucket", dev::bitbucket))
        .with(&["codeberg"], tagged("codeberg", dev::codeberg))
        // Package registries
        .with(&["crates", "cargo"], tagged("crates", dev::crates))
        .with(&["docsrs"], tagged("docsrs", dev::docsrs))
        .with(&["hackage", "hk"], tagged("hackage", dev::hackage))
        .with(&["stackage"], tagged("stackage", dev::stackage))
        .with(&["npm"], plain("npm", dev::npm))
        .with(&["pypi"], plain("pypi", dev::pypi))
        .with(&["rubygems", "gem"], plain("rubygems", dev::rubygems))
        .with(&["cran"], plain("cran", dev::cran))
        .with(&["hex"], plain("hex", dev::hex))
        .with(&["godoc", "pkg-go"], plain("godoc", dev::godoc))
        .with(&["docker"], plain("docker", dev::docker))
}

type PlainFn = fn(&str) -> ShortcutResult;
type TaggedFn = fn(Option<&str>, &str) -> ShortcutResult;

/// Wrap a resolver that takes no option.
///
/// Passing an option anyway still produces the URL, but as a warning.
fn plain(
    name: &'static str,
    resolve: PlainFn,
) -> impl Fn(Option<&str>, &str) -> ShortcutResult + Send + Sync + 'static {
    move |tag: Option<&str>, text: &str| {
        let Some(arg) = argument(text) else {
            return missing_argument(name);
        };
        match (tag, resolve(arg)) {
            (Some(tag), ShortcutResult::Success(url)) => ShortcutResult::Warning(
                vec![format!("shortcut '{name}' does not support option '{tag}'")],
                url,
            ),
            (_, result) => result,
        }
    }
}

/// Wrap a resolver that reads the option itself.
fn tagged(
    name: &'static str,
    resolve: TaggedFn,
) -> impl Fn(Option<&str>, &str) -> ShortcutResult + Send + Sync + 'static {
    move |tag: Option<&str>, text: &str| match argument(text) {
        Some(arg) => resolve(tag.map(str::trim).filter(|t| !t.is_empty()), arg),
        None => missing_argument(name),
    }
}

fn argument(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn missing_argument(name: &str) -> ShortcutResult {
    ShortcutResult::Failure(format!("shortcut '{name}' needs a non-empty argument"))
}

/// Build `base` + percent-encoded path segments + query pairs.
pub(crate) fn link(base: &str, path: &[&str], query: &[(&str, &str)]) -> ShortcutResult {
    let mut url = match Url::parse(base) {
        Ok(url) => url,
        Err(e) => return ShortcutResult::Failure(format!("invalid base url '{base}': {e}")),
    };

    if !path.is_empty() {
        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments.pop_if_empty().extend(path);
            }
            Err(()) => {
                return ShortcutResult::Failure(format!("base url '{base}' cannot take a path"))
            }
        }
    }

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }

    ShortcutResult::Success(url.to_string())
}

/// Split `owner/name` style arguments into path segments, dropping empties.
pub(crate) fn segments(arg: &str) -> Vec<&str> {
    arg.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(name: &str, tag: Option<&str>, text: &str) -> ShortcutResult {
        all_shortcuts().resolve(name, tag, text)
    }

    fn ok(url: &str) -> ShortcutResult {
        ShortcutResult::Success(url.to_string())
    }

    #[test]
    fn test_aliases_share_a_resolver() {
        assert_eq!(resolve("gh", None, "rust-lang/rust"), resolve("github", None, "rust-lang/rust"));
        assert_eq!(resolve("w", None, "Rust"), resolve("wikipedia", None, "Rust"));
    }

    #[test]
    fn test_github() {
        assert_eq!(
            resolve("github", None, "kowainik/hakyll-shortcut-links"),
            ok("https://github.com/kowainik/hakyll-shortcut-links")
        );
        assert_eq!(
            resolve("github", Some("kowainik"), "relude"),
            ok("https://github.com/kowainik/relude")
        );
        assert_eq!(resolve("gh", None, "@femtomc"), ok("https://github.com/femtomc"));
    }

    #[test]
    fn test_github_owner_path_in_option() {
        assert_eq!(
            resolve("github", Some("kowainik/hakyll-shortcut-links"), "repo"),
            ok("https://github.com/kowainik/hakyll-shortcut-links/repo")
        );
        assert_eq!(
            resolve("gh", Some("rust-lang/rust"), "issues"),
            ok("https://github.com/rust-lang/rust/issues")
        );
    }

    #[test]
    fn test_wikipedia_language_and_spaces() {
        assert_eq!(
            resolve("w", None, "Haskell Curry"),
            ok("https://en.wikipedia.org/wiki/Haskell_Curry")
        );
        assert_eq!(
            resolve("w", Some("fr"), "Tour Eiffel"),
            ok("https://fr.wikipedia.org/wiki/Tour_Eiffel")
        );
        assert!(matches!(
            resolve("w", Some("e n"), "x"),
            ShortcutResult::Failure(_)
        ));
    }

    #[test]
    fn test_search_query_is_encoded() {
        assert_eq!(
            resolve("google", None, "rust borrow checker"),
            ok("https://www.google.com/search?q=rust+borrow+checker")
        );
    }

    #[test]
    fn test_option_on_plain_shortcut_warns() {
        match resolve("npm", Some("latest"), "left-pad") {
            ShortcutResult::Warning(messages, url) => {
                assert_eq!(url, "https://www.npmjs.com/package/left-pad");
                assert_eq!(
                    messages,
                    vec!["shortcut 'npm' does not support option 'latest'".to_string()]
                );
            }
            other => panic!("expected warning, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_argument_fails() {
        assert_eq!(
            resolve("hackage", None, "  "),
            ShortcutResult::Failure("shortcut 'hackage' needs a non-empty argument".into())
        );
    }

    #[test]
    fn test_registries() {
        assert_eq!(resolve("crates", None, "serde"), ok("https://crates.io/crates/serde"));
        assert_eq!(
            resolve("docsrs", Some("1.0.0"), "serde"),
            ok("https://docs.rs/serde/1.0.0")
        );
        assert_eq!(
            resolve("hackage", Some("4.18.0.0"), "base"),
            ok("https://hackage.haskell.org/package/base-4.18.0.0")
        );
        assert_eq!(
            resolve("stackage", None, "text"),
            ok("https://www.stackage.org/lts/package/text")
        );
        assert_eq!(
            resolve("npm", None, "@types/node"),
            ok("https://www.npmjs.com/package/@types/node")
        );
        assert_eq!(resolve("docker", None, "nginx"), ok("https://hub.docker.com/_/nginx"));
    }

    #[test]
    fn test_rfc_requires_number() {
        assert_eq!(resolve("rfc", None, "3986"), ok("https://www.rfc-editor.org/rfc/rfc3986"));
        assert!(matches!(resolve("rfc", None, "uri"), ShortcutResult::Failure(_)));
    }

    #[test]
    fn test_catalog_is_shared() {
        assert!(std::ptr::eq(all_shortcuts(), all_shortcuts()));
        assert!(all_shortcuts().len() >= 20);
    }
}
