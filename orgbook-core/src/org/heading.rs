//! Heading recognition and trailing tag clusters

use regex::Regex;
use std::sync::LazyLock;

/// Trailing `:tag1:tag2:` cluster, separated from the title by whitespace
static TAG_CLUSTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s+:[A-Za-z0-9_@#%:]+:\s*$").expect("tag cluster regex")
});

/// A parsed org heading line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Number of leading stars
    pub level: usize,
    /// Heading text without stars and without the trailing tag cluster
    pub title: String,
}

/// Parse `line` as an org heading.
///
/// A heading is one or more `*` at column 0 followed by a space or tab.
/// Lines such as `*bold* text` or a bare `***` are not headings.
pub fn parse_heading(line: &str) -> Option<Heading> {
    let level = line.bytes().take_while(|&b| b == b'*').count();
    if level == 0 {
        return None;
    }
    let rest = &line[level..];
    if !rest.starts_with([' ', '\t']) {
        return None;
    }

    Some(Heading {
        level,
        title: strip_tags(rest).to_string(),
    })
}

/// Remove a trailing tag cluster from heading text.
///
/// Only a cluster at the very end of the text, preceded by whitespace, is
/// removed; colons elsewhere in the title are left alone.
pub fn strip_tags(text: &str) -> &str {
    let text = text.trim();
    TAG_CLUSTER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or(text, |title| title.as_str().trim_end())
}
