//! Resolution of `[[id:GUID]]` links to the file declaring that id

use crate::error::{BookError, Result};
use std::fs;
use std::path::Path;

/// Find the `.org` file in `dir` that declares `guid`.
///
/// Files are scanned in lexicographic filename order and the first one with
/// a `#+ID: GUID` or `:ID: GUID` line wins. Matching ignores ASCII case and
/// surrounding whitespace. Files that cannot be read are skipped. Nothing is
/// cached: every call rescans the directory.
pub fn resolve_id(dir: &Path, guid: &str) -> Result<Option<String>> {
    let entries = fs::read_dir(dir).map_err(|err| {
        BookError::parse(dir, format!("Unable to scan directory for id {guid}: {err}"))
    })?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| is_org_file(name))
        .collect();
    names.sort();

    for name in names {
        let content = match fs::read_to_string(dir.join(&name)) {
            Ok(content) => content,
            Err(err) => {
                tracing::trace!(file = %name, error = %err, "Skipping unreadable file");
                continue;
            }
        };
        if content.lines().any(|line| declares_id(line, guid)) {
            return Ok(Some(name));
        }
    }

    Ok(None)
}

fn is_org_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("org"))
}

fn declares_id(line: &str, guid: &str) -> bool {
    let line = line.trim();
    ["#+id:", ":id:"].iter().any(|keyword| {
        line.get(..keyword.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(keyword))
            && line[keyword.len()..].trim().eq_ignore_ascii_case(guid)
    })
}
