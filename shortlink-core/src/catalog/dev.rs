//! Developer shortcuts: code forges and package registries.

use super::{link, segments};
use crate::shortcut::ShortcutResult;

/// Forge link: the option names the owner, otherwise the argument carries it
/// (`owner/repo`). Either may span several path segments. A leading `@` on
/// user names is dropped.
fn forge(base: &str, owner: Option<&str>, arg: &str) -> ShortcutResult {
    let arg = arg.trim_start_matches('@');
    let mut path = owner
        .map(|o| segments(o.trim_start_matches('@')))
        .unwrap_or_default();
    path.extend(segments(arg));
    link(base, &path, &[])
}

pub(super) fn github(owner: Option<&str>, arg: &str) -> ShortcutResult {
    forge("https://github.com/", owner, arg)
}

pub(super) fn gitlab(owner: Option<&str>, arg: &str) -> ShortcutResult {
    forge("https://gitlab.com/", owner, arg)
}

pub(super) fn bitbucket(owner: Option<&str>, arg: &str) -> ShortcutResult {
    forge("https://bitbucket.org/", owner, arg)
}

pub(super) fn codeberg(owner: Option<&str>, arg: &str) -> ShortcutResult {
    forge("https://codeberg.org/", owner, arg)
}

/// Option is a version.
pub(super) fn crates(version: Option<&str>, name: &str) -> ShortcutResult {
    match version {
        Some(version) => link("https://crates.io/crates/", &[name, version], &[]),
        None => link("https://crates.io/crates/", &[name], &[]),
    }
}

/// Option is a version.
pub(super) fn docsrs(version: Option<&str>, name: &str) -> ShortcutResult {
    match version {
        Some(version) => link("https://docs.rs/", &[name, version], &[]),
        None => link("https://docs.rs/", &[name], &[]),
    }
}

/// Option is a version, appended Hackage style (`base-4.18.0.0`).
pub(super) fn hackage(version: Option<&str>, package: &str) -> ShortcutResult {
    let package = match version {
        Some(version) => format!("{package}-{version}"),
        None => package.to_string(),
    };
    link("https://hackage.haskell.org/package/", &[package.as_str()], &[])
}

/// Option is a snapshot (`lts`, `nightly`, `lts-22.0`); defaults to `lts`.
pub(super) fn stackage(snapshot: Option<&str>, package: &str) -> ShortcutResult {
    let snapshot = snapshot.unwrap_or("lts");
    link(
        "https://www.stackage.org/",
        &[snapshot, "package", package],
        &[],
    )
}

/// Scoped packages (`@scope/name`) keep their slash.
pub(super) fn npm(package: &str) -> ShortcutResult {
    let mut path = vec!["package"];
    path.extend(segments(package));
    link("https://www.npmjs.com/", &path, &[])
}

pub(super) fn pypi(package: &str) -> ShortcutResult {
    link("https://pypi.org/project/", &[package], &[])
}

pub(super) fn rubygems(gem: &str) -> ShortcutResult {
    link("https://rubygems.org/gems/", &[gem], &[])
}

pub(super) fn cran(package: &str) -> ShortcutResult {
    let segment = format!("package={package}");
    link("https://cran.r-project.org/", &[segment.as_str()], &[])
}

pub(super) fn hex(package: &str) -> ShortcutResult {
    link("https://hex.pm/packages/", &[package], &[])
}

pub(super) fn godoc(import_path: &str) -> ShortcutResult {
    link("https://pkg.go.dev/", &segments(import_path), &[])
}

/// Official images live under `_/`, everything else under `r/`.
pub(super) fn docker(image: &str) -> ShortcutResult {
    let parts = segments(image);
    if parts.len() == 1 {
        link("https://hub.docker.com/_/", &parts, &[])
    } else {
        let mut path = vec!["r"];
        path.extend(parts);
        link("https://hub.docker.com/", &path, &[])
    }
}
