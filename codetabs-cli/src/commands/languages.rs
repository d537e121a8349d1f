//! List the language registry.

use anyhow::Result;
use codetabs_core::language::descriptors;

pub fn list_languages(json: bool) -> Result<()> {
    if json {
        let rows: Vec<_> = descriptors().collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for desc in descriptors() {
            println!("{:<8} {:<8} {}", desc.id, desc.label, desc.tag);
        }
    }

    Ok(())
}
