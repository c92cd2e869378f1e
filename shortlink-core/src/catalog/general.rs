//! General-purpose shortcuts: encyclopedias, search engines, social sites, papers.

use super::{link, segments};
use crate::shortcut::ShortcutResult;

pub(super) fn wikipedia(lang: Option<&str>, article: &str) -> ShortcutResult {
    let lang = lang.unwrap_or("en");
    if !lang.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return ShortcutResult::Failure(format!("invalid wikipedia language '{lang}'"));
    }
    let article = article.replace(' ', "_");
    link(
        &format!("https://{lang}.wikipedia.org/wiki/"),
        &[article.as_str()],
        &[],
    )
}

pub(super) fn google(query: &str) -> ShortcutResult {
    link("https://www.google.com/search", &[], &[("q", query)])
}

pub(super) fn duckduckgo(query: &str) -> ShortcutResult {
    link("https://duckduckgo.com/", &[], &[("q", query)])
}

pub(super) fn youtube(query: &str) -> ShortcutResult {
    link("https://www.youtube.com/results", &[], &[("search_query", query)])
}

pub(super) fn twitter(user: &str) -> ShortcutResult {
    link("https://twitter.com/", &[user.trim_start_matches('@')], &[])
}

/// `rust`, `r/rust` and `/r/rust` all name a subreddit; `u/name` a user.
pub(super) fn reddit(target: &str) -> ShortcutResult {
    let parts = segments(target);
    match parts.as_slice() {
        [kind @ ("r" | "u" | "user"), rest @ ..] if !rest.is_empty() => {
            let mut path = vec![*kind];
            path.extend_from_slice(rest);
            link("https://www.reddit.com/", &path, &[])
        }
        _ => link("https://www.reddit.com/r/", &parts, &[]),
    }
}

/// A question id links to the question, anything else searches.
pub(super) fn stackoverflow(query: &str) -> ShortcutResult {
    if query.chars().all(|c| c.is_ascii_digit()) {
        link("https://stackoverflow.com/q/", &[query], &[])
    } else {
        link("https://stackoverflow.com/search", &[], &[("q", query)])
    }
}

pub(super) fn arxiv(id: &str) -> ShortcutResult {
    let mut path = vec!["abs"];
    path.extend(segments(id));
    link("https://arxiv.org/", &path, &[])
}

pub(super) fn doi(id: &str) -> ShortcutResult {
    link("https://doi.org/", &segments(id), &[])
}

pub(super) fn rfc(number: &str) -> ShortcutResult {
    let digits = number
        .strip_prefix("RFC")
        .or_else(|| number.strip_prefix("rfc"))
        .unwrap_or(number)
        .trim();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return ShortcutResult::Failure(format!("'{number}' is not an RFC number"));
    }
    let page = format!("rfc{digits}");
    link("https://www.rfc-editor.org/rfc/", &[page.as_str()], &[])
}
