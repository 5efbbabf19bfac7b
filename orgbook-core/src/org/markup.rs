//! Inline markup: emphasis spans and `[[target][description]]` links

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// `[[target]]` or `[[target][description]]`; either part may be empty
static ORG_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[([^\[\]]*)\](?:\[([^\[\]]*)\])?\]").expect("org link regex")
});

/// Emphasis markers, applied in this order
const EMPHASIS_MARKERS: [char; 6] = ['*', '/', '_', '+', '~', '='];

/// One regex per marker. A span must open at the start of the text or after
/// a non-word character and close at the end of the text or before one. Its
/// body may not start or end with whitespace and may not cross a line break.
static EMPHASIS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    EMPHASIS_MARKERS
        .iter()
        .map(|marker| {
            let m = regex::escape(&marker.to_string());
            let pattern = format!(r"(^|[^\w{m}]){m}([^\s{m}](?:[^{m}\n]*[^\s{m}])?){m}($|[^\w{m}])");
            Regex::new(&pattern).expect("emphasis regex")
        })
        .collect()
});

/// An org link found in a piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgLink<'a> {
    pub target: &'a str,
    pub description: Option<&'a str>,
    /// Byte range of the whole `[[...]]` construct
    pub span: Range<usize>,
}

/// Iterate over the links in `text` in order of appearance.
///
/// Unterminated `[[` fragments are skipped.
pub fn links(text: &str) -> impl Iterator<Item = OrgLink<'_>> {
    ORG_LINK.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        Some(OrgLink {
            target: caps.get(1)?.as_str(),
            description: caps.get(2).map(|m| m.as_str()),
            span: whole.range(),
        })
    })
}

/// Strip inline markup, leaving plain text.
///
/// Links become their description (or their target when they have none),
/// then emphasis spans become their inner text. Link targets are never
/// touched by emphasis stripping, so URLs keep their slashes and
/// underscores.
pub fn remove_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for link in links(text) {
        out.push_str(&strip_emphasis(&text[last..link.span.start]));
        match link.description.filter(|d| !d.is_empty()) {
            Some(description) => out.push_str(&strip_emphasis(description)),
            None => out.push_str(link.target),
        }
        last = link.span.end;
    }
    out.push_str(&strip_emphasis(&text[last..]));

    out
}

fn strip_emphasis(text: &str) -> String {
    let mut out = text.to_string();
    for re in EMPHASIS.iter() {
        // The boundary after a span is consumed, so a span starting right
        // behind it only matches on the next pass.
        loop {
            let stripped = re.replace_all(&out, "${1}${2}${3}").into_owned();
            if stripped == out {
                break;
            }
            out = stripped;
        }
    }
    out
}

/// Extract `(url, description)` pairs from `text`.
///
/// Described links come first in order of appearance. Bare links follow,
/// with their URL as description, unless a described link already
/// captured the same URL.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    let mut described = Vec::new();
    let mut bare = Vec::new();

    for link in links(text).filter(|l| !l.target.is_empty()) {
        match link.description {
            Some(description) if !description.is_empty() => {
                described.push((link.target.to_string(), description.to_string()));
            }
            Some(_) => {}
            None => bare.push(link.target),
        }
    }

    let mut result = described.clone();
    for url in bare {
        if !described.iter().any(|(target, _)| target == url) {
            result.push((url.to_string(), url.to_string()));
        }
    }
    result
}
