//! Markup-aware word counting
//!
//! Counting walks the text line by line through three states: prose,
//! property drawer and fenced block. Each prose line is classified with a
//! fixed precedence (fence opener, drawer opener, directive, comment,
//! heading, text), so a line removed by one rule is never re-examined by a
//! later one.

use super::heading::{parse_heading, strip_tags};

/// Kinds of `#+BEGIN_X` block whose bodies are not prose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    Src,
    Example,
    Quote,
}

impl BlockKind {
    const ALL: [BlockKind; 3] = [BlockKind::Src, BlockKind::Example, BlockKind::Quote];

    fn begin_keyword(self) -> &'static str {
        match self {
            BlockKind::Src => "#+begin_src",
            BlockKind::Example => "#+begin_example",
            BlockKind::Quote => "#+begin_quote",
        }
    }

    fn end_keyword(self) -> &'static str {
        match self {
            BlockKind::Src => "#+end_src",
            BlockKind::Example => "#+end_example",
            BlockKind::Quote => "#+end_quote",
        }
    }

    fn opened_by(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| keyword_line(line, kind.begin_keyword()))
    }

    fn closed_by(self, line: &str) -> bool {
        keyword_line(line, self.end_keyword())
    }
}

/// Which closing lines occur somewhere after a given line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ClosersAhead {
    fences: [bool; 3],
    drawer: bool,
}

impl ClosersAhead {
    fn fence(self, kind: BlockKind) -> bool {
        self.fences[kind as usize]
    }

    fn observe(&mut self, line: &str) {
        for kind in BlockKind::ALL {
            if kind.closed_by(line) {
                self.fences[kind as usize] = true;
            }
        }
        if is_drawer_end(line) {
            self.drawer = true;
        }
    }
}

/// One backward pass: entry `i` records the closers found in `lines[i + 1..]`.
pub(crate) fn closers_ahead(lines: &[&str]) -> Vec<ClosersAhead> {
    let mut ahead = vec![ClosersAhead::default(); lines.len()];
    let mut seen = ClosersAhead::default();
    for (i, line) in lines.iter().enumerate().rev() {
        ahead[i] = seen;
        seen.observe(line);
    }
    ahead
}

/// How a line outside any drawer or block is treated
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    /// Opens a fenced block that is closed later in the text
    FenceOpen(BlockKind),
    /// Opens a property drawer that is closed later in the text
    DrawerOpen,
    Directive,
    Comment,
    /// Heading text with the star marker and tag cluster removed
    Heading(&'a str),
    Text(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Prose,
    PropertyDrawer,
    FencedBlock(BlockKind),
}

/// Count the words of `text`, ignoring org markup that is not prose.
///
/// Directives, comments, property drawers, the bodies of SRC, EXAMPLE and
/// QUOTE blocks, heading stars and trailing tag clusters are excluded. The
/// remainder is split on whitespace.
pub fn count_words(text: &str) -> usize {
    let lines: Vec<&str> = text.lines().collect();
    let ahead = closers_ahead(&lines);
    let mut state = State::Prose;
    let mut words = 0;

    for (i, line) in lines.iter().enumerate() {
        state = match state {
            State::FencedBlock(kind) if kind.closed_by(line) => State::Prose,
            State::PropertyDrawer if is_drawer_end(line) => State::Prose,
            State::FencedBlock(_) | State::PropertyDrawer => state,
            State::Prose => match classify_line(line, ahead[i]) {
                LineKind::FenceOpen(kind) => State::FencedBlock(kind),
                LineKind::DrawerOpen => State::PropertyDrawer,
                LineKind::Directive | LineKind::Comment => State::Prose,
                LineKind::Heading(words_text) | LineKind::Text(words_text) => {
                    words += words_text.split_whitespace().count();
                    State::Prose
                }
            },
        };
    }

    words
}

/// Classify a prose line. `ahead` says whether a fence or drawer opened here
/// is actually closed later; unterminated openers are not special.
pub(crate) fn classify_line(line: &str, ahead: ClosersAhead) -> LineKind<'_> {
    let trimmed = line.trim_start();

    if let Some(kind) = BlockKind::opened_by(trimmed) {
        if ahead.fence(kind) {
            return LineKind::FenceOpen(kind);
        }
    }
    if is_drawer_start(trimmed) && ahead.drawer {
        return LineKind::DrawerOpen;
    }
    if trimmed.starts_with("#+") {
        return LineKind::Directive;
    }
    if trimmed.starts_with('#') {
        return LineKind::Comment;
    }
    if let Some(level) = heading_marker_len(line) {
        return LineKind::Heading(strip_tags(&line[level..]));
    }
    LineKind::Text(line)
}

fn heading_marker_len(line: &str) -> Option<usize> {
    parse_heading(line).map(|h| h.level)
}

/// `keyword` at the start of the line, case-insensitive, followed by
/// whitespace or the end of the line.
fn keyword_line(line: &str, keyword: &str) -> bool {
    let line = line.trim_start();
    match line.get(..keyword.len()) {
        Some(head) if head.eq_ignore_ascii_case(keyword) => line[keyword.len()..]
            .chars()
            .next()
            .map_or(true, char::is_whitespace),
        _ => false,
    }
}

fn is_drawer_start(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(":properties:")
}

fn is_drawer_end(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(":end:")
}
