//! Render command implementation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Render a markdown file to HTML, writing to `output` or stdout.
pub fn render_file(config_path: &Path, input: &Path, output: Option<&Path>) -> Result<()> {
    let (processor, markdown) = super::load(config_path, input)?;
    let page = processor.convert(&markdown);

    tracing::info!(
        "Rendered {:?} with {} code tab group(s)",
        input,
        page.groups.len()
    );

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {:?}", parent))?;
            }
            fs::write(path, &page.html)
                .with_context(|| format!("Failed to write output file {:?}", path))?;
        }
        None => print!("{}", page.html),
    }

    Ok(())
}
