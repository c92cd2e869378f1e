//! Resolve one shortcut target from the command line.

use super::load_shortcuts;
use anyhow::{anyhow, bail, Result};
use shortlink_core::{parse_shortcut, Parse};
use std::path::Path;

pub fn resolve_target(config_path: &Path, target: &str, text: Option<&str>) -> Result<()> {
    let shortcut = match parse_shortcut(target) {
        Parse::NoMatch => bail!("'{target}' is not a shortcut link (it must start with '@')"),
        Parse::Error(err) => bail!("{err}"),
        Parse::Parsed(shortcut) => shortcut,
    };

    let Some(text) = shortcut.text.as_deref().or(text) else {
        bail!("no link text: use @name(text) or pass --text");
    };

    let shortcuts = load_shortcuts(config_path)?;
    match shortcuts
        .resolve(&shortcut.name, shortcut.tag.as_deref(), text)
        .into_strict()
    {
        Ok(url) => {
            println!("{url}");
            Ok(())
        }
        Err(messages) => {
            for message in &messages {
                eprintln!("error: {message}");
            }
            Err(anyhow!("could not resolve '{target}'"))
        }
    }
}
