//! Parsers turning org files into book model types

mod chapter;
mod id;
mod toc;

pub use chapter::{parse_chapter, ChapterParser};
pub use id::resolve_id;
pub use toc::{parse_toc, TocParser};

use crate::error::{BookError, Result};
use crate::org::{parse_heading, Heading};
use std::fs;
use std::path::Path;

/// Read an org file as UTF-8, classifying failures.
fn read_org_file(path: &Path, missing_detail: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|err| BookError::from_io(path, &err, missing_detail))
}

/// The first top-level heading of `content` and the lines of its body, up to
/// the next top-level heading or the end of the text.
fn first_top_level_span(content: &str) -> Option<(Heading, Vec<&str>)> {
    let mut lines = content.lines();
    let heading = lines.by_ref().find_map(top_level_heading)?;
    let body = lines.take_while(|line| top_level_heading(line).is_none()).collect();
    Some((heading, body))
}

fn top_level_heading(line: &str) -> Option<Heading> {
    parse_heading(line).filter(|h| h.level == 1)
}
