//! TOC command implementation

use anyhow::{Context, Result};
use orgbook_core::TocParser;
use std::path::Path;

/// List the entries of a table-of-contents file
pub fn toc(file: &Path) -> Result<()> {
    let entries = TocParser::new(file)
        .parse()
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    if entries.is_empty() {
        println!("No entries found in {}", file.display());
        return Ok(());
    }

    for entry in &entries {
        match entry.filename() {
            Some(filename) => println!("{} -> {}", entry.title(), filename),
            None => println!("[part] {}", entry.title()),
        }
    }

    let parts = entries.iter().filter(|e| e.is_part()).count();
    println!();
    println!("{} chapters, {} parts", entries.len() - parts, parts);

    Ok(())
}
