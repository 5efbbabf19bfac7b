//! Count command implementation

use anyhow::{Context, Result};
use orgbook_core::count_words;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Count output
#[derive(Serialize)]
struct FileCount {
    file: String,
    words: usize,
}

/// Print the markup-aware word count of a single file
pub fn count(file: &Path, json: bool) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read input file: {}", file.display()))?;

    let counted = FileCount {
        file: file.display().to_string(),
        words: count_words(&content),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&counted)?);
    } else {
        println!("{}", counted.words);
    }
    Ok(())
}
