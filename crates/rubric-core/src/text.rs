//! Line-level helpers shared by the parser and emitters.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```[A-Za-z0-9_+.\-]*$").unwrap());
static STRONG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());

/// Run of dashes that marks a table separator row
pub const SEPARATOR_RUN: &str = "---";

/// Check if a line is a code fence marker, with or without a language tag
pub fn is_fence_line(line: &str) -> bool {
    FENCE.is_match(line.trim())
}

/// Drop fence marker lines, keeping the fenced content
pub fn strip_code_fences(markdown: &str) -> String {
    markdown
        .split('\n')
        .filter(|line| !is_fence_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check if a trimmed line is a pipe-delimited table row
///
/// At least one interior cell is required, so a lone `|` in prose does
/// not start a table.
pub fn is_table_line(line: &str) -> bool {
    line.contains('|') && line.split('|').nth(2).is_some()
}

/// Check if a table line is a `---` separator row
pub fn is_separator_line(line: &str) -> bool {
    line.contains(SEPARATOR_RUN)
}

/// Split a table line into trimmed, non-empty cells
pub fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

/// Remove `**bold**` then `*italic*` markers, keeping the wrapped text
pub fn strip_emphasis(text: &str) -> Cow<'_, str> {
    if !text.contains('*') {
        return Cow::Borrowed(text);
    }
    let strong = STRONG.replace_all(text, "$1");
    Cow::Owned(EMPHASIS.replace_all(&strong, "$1").into_owned())
}
