//! Table-of-contents parser

use super::{first_top_level_span, read_org_file, resolve_id};
use crate::error::{BookError, Result};
use crate::org::{links, parse_heading, OrgLink};
use crate::types::TocEntry;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parser for the table-of-contents file of a book directory
#[derive(Debug, Clone)]
pub struct TocParser {
    path: PathBuf,
}

impl TocParser {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the TOC file.
    ///
    /// Fails with `NotFound` when the file does not exist and with `Parse`
    /// when it cannot be read as UTF-8 or holds nothing but whitespace.
    pub fn parse(&self) -> Result<Vec<TocEntry>> {
        let content = read_org_file(&self.path, "TOC file not found")?;
        if content.trim().is_empty() {
            return Err(BookError::parse(&self.path, "TOC file is empty"));
        }

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        parse_toc(&content, dir)
    }
}

/// Extract TOC entries from `content`.
///
/// Only the body of the first top-level heading is considered. `dir` is the
/// directory searched when resolving `[[id:...]]` links.
pub fn parse_toc(content: &str, dir: &Path) -> Result<Vec<TocEntry>> {
    let Some((_, body)) = first_top_level_span(content) else {
        return Ok(Vec::new());
    };

    let mut entries = Vec::new();
    for line in body {
        let mut line_links = links(line).peekable();

        if line_links.peek().is_none() {
            if let Some(heading) = parse_heading(line).filter(|h| h.level == 2) {
                if !heading.title.is_empty() {
                    entries.push(TocEntry::part(heading.title));
                }
            }
            continue;
        }

        for link in line_links {
            if let Some(entry) = chapter_entry(&link, dir)? {
                entries.push(entry);
            }
        }
    }

    Ok(entries)
}

/// Turn a `file:` or `id:` link into a chapter entry. Malformed links and
/// ids that no file declares yield `None`.
fn chapter_entry(link: &OrgLink<'_>, dir: &Path) -> Result<Option<TocEntry>> {
    let title = link.description.map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return Ok(None);
    }

    let Some((scheme, target)) = link.target.split_once(':') else {
        return Ok(None);
    };

    match scheme {
        "file" => {
            let filename = target.split("::").next().unwrap_or_default().trim();
            if filename.is_empty() {
                return Ok(None);
            }
            Ok(Some(TocEntry::chapter(filename, title)))
        }
        "id" => {
            let guid = target.trim();
            if guid.is_empty() {
                return Ok(None);
            }
            match resolve_id(dir, guid)? {
                Some(filename) => Ok(Some(TocEntry::chapter(filename, title))),
                None => {
                    debug!(id = guid, title, "No file declares id, dropping TOC entry");
                    Ok(None)
                }
            }
        }
        _ => Ok(None),
    }
}
