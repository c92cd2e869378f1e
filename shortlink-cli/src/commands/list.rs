//! List shortcut names in lookup order.

use super::load_shortcuts;
use anyhow::Result;
use std::path::Path;

pub fn list_shortcuts(config_path: &Path, json: bool) -> Result<()> {
    let shortcuts = load_shortcuts(config_path)?;
    let names: Vec<&[String]> = shortcuts.names().collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    for aliases in names {
        match aliases.split_first() {
            Some((primary, [])) => println!("{primary}"),
            Some((primary, rest)) => println!("{primary} ({})", rest.join(", ")),
            None => {}
        }
    }
    Ok(())
}
