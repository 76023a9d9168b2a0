//! Removing the common `*`-and-whitespace prefix from the lines of a comment.
//!
//! Documentation comments are conventionally written with a leading `*` on each line:
//!
//! ```text
//! /**
//!  * function:: foo()
//!  *
//!  * Does a thing.
//!  */
//! ```
//!
//! Each line's indent is the run of `*` and whitespace before its first other character. The
//! smallest indent among lines that have any other character is removed from every line.

use once_cell::sync::Lazy;
use regex::Regex;

/// Prepended to the first line of a comment body so its indent is measured like the following
/// lines', which conventionally start with ` * `.
const FIRST_LINE_MARKERS: &str = "**";

/// The `*`-and-whitespace run before a line's first other character.
static CONTENT_INDENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([*\s]*)[^*\s]").unwrap());

/// The width in characters of the `*`-and-whitespace run before the first other character of
/// `line`, or `None` if the line has no other characters.
fn content_indent(line: &str) -> Option<usize> {
    CONTENT_INDENT_RE
        .captures(line)
        .map(|captures| captures[1].chars().count())
}

/// `line` without its first `count` characters. Empty if the line is shorter than that.
fn drop_chars(line: &str, count: usize) -> &str {
    line.char_indices()
        .nth(count)
        .map_or("", |(offset, _)| &line[offset..])
}

/// Remove the smallest content indent from every line.
///
/// Lines with no content don't count towards the smallest indent, and lose as many characters
/// as they have up to it. If no line has any content, nothing is removed.
pub fn dedent<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let width = lines
        .iter()
        .filter_map(|line| content_indent(line.as_ref()))
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| drop_chars(line.as_ref(), width).to_owned())
        .collect()
}

/// Split a comment body into lines, on `\n` or `\r\n`.
///
/// The first line gets [`FIRST_LINE_MARKERS`] prepended, making up for the markers consumed by
/// the opening `/**`.
pub fn comment_lines(body: &str) -> Vec<String> {
    body.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{FIRST_LINE_MARKERS}{line}")
            } else {
                line.to_owned()
            }
        })
        .collect()
}

/// Split a comment body into lines and [`dedent`] them.
///
/// Returns `None` if the body is nothing but markers and whitespace.
pub fn dedent_comment_body(body: &str) -> Option<Vec<String>> {
    let lines = comment_lines(body);
    if lines.iter().all(|line| content_indent(line).is_none()) {
        return None;
    }
    Some(dedent(&lines))
}
