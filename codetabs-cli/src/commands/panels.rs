//! Dump the code tab groups of a markdown file.

use anyhow::Result;
use std::path::Path;

pub fn print_panels(config_path: &Path, input: &Path, pretty: bool) -> Result<()> {
    let (processor, markdown) = super::load(config_path, input)?;
    let groups = processor.convert(&markdown).groups;

    let json = if pretty {
        serde_json::to_string_pretty(&groups)?
    } else {
        serde_json::to_string(&groups)?
    };
    println!("{json}");

    Ok(())
}
