//! CLI command implementations.

pub mod languages;
pub mod panels;
pub mod render;

pub use languages::list_languages;
pub use panels::print_panels;
pub use render::render_file;

use anyhow::{Context, Result};
use codetabs_core::{Config, MarkdownProcessor};
use std::path::Path;

/// Load the config (or defaults) and read the markdown input
fn load(config_path: &Path, input: &Path) -> Result<(MarkdownProcessor, String)> {
    let config = Config::load_or_default(config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;
    let markdown = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file {:?}", input))?;
    Ok((MarkdownProcessor::new(config), markdown))
}
