//! Source text and the comments found in it.

mod javascript;

use std::fmt::Display;
use std::io::Read;
use std::ops::Range;

use camino::Utf8Path;
use line_span::LineSpanExt;
use miette::IntoDiagnostic;
use miette::NamedSource;
use miette::WrapErr;

use crate::cli::Opts;

pub use javascript::JavaScriptComments;

/// Source code to extract documentation from, read in full before any processing starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    /// Where the text came from, for diagnostics. `<stdin>` for standard input.
    name: String,
    text: String,
    /// Byte bounds of each line, in order.
    lines: Vec<LineBounds>,
}

/// Where a line is in a [`SourceText`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct LineBounds {
    /// The line's contents, without its line ending.
    content: Range<usize>,
    /// The end of the line, including its line ending.
    end: usize,
}

impl SourceText {
    /// Construct a `SourceText` from a name and its contents.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = text
            .line_spans()
            .map(|line_span| LineBounds {
                content: line_span.range(),
                end: line_span.range_with_ending().end,
            })
            .collect();
        Self {
            name: name.into(),
            text,
            lines,
        }
    }

    /// Read the source named by the command-line options: the `--input` file if given, otherwise
    /// standard input.
    pub fn from_cli(opts: &Opts) -> miette::Result<Self> {
        match &opts.input {
            Some(path) => Self::from_path(path),
            None => Self::from_stdin(),
        }
    }

    /// Read all of standard input.
    pub fn from_stdin() -> miette::Result<Self> {
        let mut text = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut text)
            .into_diagnostic()
            .wrap_err("Failed to read standard input")?;
        Ok(Self::new("<stdin>", text))
    }

    /// Read a source file.
    pub fn from_path(path: &Utf8Path) -> miette::Result<Self> {
        let text = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read {path}"))?;
        Ok(Self::new(path.as_str(), text))
    }

    /// The name of this source, for diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The source text itself.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// This source as a [`NamedSource`], for attaching to diagnostics with byte-offset labels.
    pub fn named_source(&self) -> NamedSource {
        NamedSource::new(&self.name, self.text.clone())
    }

    /// Convert a byte offset into a 1-indexed line and column.
    ///
    /// Offsets past the end of the text are clamped to the last position.
    pub fn position(&self, offset: usize) -> SourcePosition {
        let index = self
            .lines
            .partition_point(|line| line.end <= offset)
            .min(self.lines.len().saturating_sub(1));
        let Some(line) = self.lines.get(index) else {
            return SourcePosition { line: 1, column: 1 };
        };
        let column_end = offset.clamp(line.content.start, line.content.end);
        SourcePosition {
            line: index + 1,
            column: self.text[line.content.start..column_end].chars().count() + 1,
        }
    }
}

/// A 1-indexed line and column in a [`SourceText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// The line number.
    pub line: usize,
    /// The column number, counted in characters.
    pub column: usize,
}

impl Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The syntactic kind of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// A `/* ... */` comment.
    Block,
    /// A `// ...` comment.
    Line,
}

impl Display for CommentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommentKind::Block => write!(f, "block"),
            CommentKind::Line => write!(f, "line"),
        }
    }
}

/// A comment found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    /// Block or line comment.
    pub kind: CommentKind,
    /// The text between the comment delimiters, with the delimiters themselves removed.
    pub body: String,
    /// The byte offsets of the whole comment in the source, delimiters included.
    pub span: Range<usize>,
}

impl CommentRecord {
    /// Construct a new comment record.
    pub fn new(kind: CommentKind, body: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind,
            body: body.into(),
            span,
        }
    }
}

/// Something that can find the comments in source text.
///
/// Implementations must report comments in source order. Source that can't be tokenized is an
/// error; the returned [`miette::Report`] may carry byte-offset labels into `source`, which
/// callers attach the source text to.
pub trait CommentExtractor {
    /// Find all the comments in `source`.
    fn extract_comments(&self, source: &str) -> miette::Result<Vec<CommentRecord>>;
}

impl<T: CommentExtractor + ?Sized> CommentExtractor for &T {
    fn extract_comments(&self, source: &str) -> miette::Result<Vec<CommentRecord>> {
        (**self).extract_comments(source)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_position() {
        let source = SourceText::new(
            "puppy.js",
            indoc!(
                "
                const puppy = 1;
                /** doggy */
                "
            ),
        );

        assert_eq!(source.position(0), SourcePosition { line: 1, column: 1 });
        assert_eq!(source.position(6), SourcePosition { line: 1, column: 7 });
        // The newline belongs to the line it ends.
        assert_eq!(
            source.position(16),
            SourcePosition {
                line: 1,
                column: 17
            }
        );
        assert_eq!(source.position(17), SourcePosition { line: 2, column: 1 });
        assert_eq!(source.position(21), SourcePosition { line: 2, column: 5 });
        // Past the end.
        assert_eq!(
            source.position(1000),
            SourcePosition {
                line: 2,
                column: 13
            }
        );
        assert_eq!(source.position(21).to_string(), "2:5");
    }

    #[test]
    fn test_position_counts_characters() {
        let source = SourceText::new("<stdin>", "// “quoted”\nx");
        // `x` is after a line of 11 characters and 15 bytes.
        assert_eq!(source.position(16), SourcePosition { line: 2, column: 1 });
        // The closing quote starts at byte 12.
        assert_eq!(
            source.position(12),
            SourcePosition {
                line: 1,
                column: 11
            }
        );
    }

    #[test]
    fn test_position_line_endings() {
        let source = SourceText::new("<stdin>", "a\r\nbc\n\nd");

        assert_eq!(source.position(1), SourcePosition { line: 1, column: 2 });
        // Inside a `\r\n` is still the end of the line.
        assert_eq!(source.position(2), SourcePosition { line: 1, column: 2 });
        assert_eq!(source.position(3), SourcePosition { line: 2, column: 1 });
        assert_eq!(source.position(5), SourcePosition { line: 2, column: 3 });
        // An empty line.
        assert_eq!(source.position(6), SourcePosition { line: 3, column: 1 });
        assert_eq!(source.position(7), SourcePosition { line: 4, column: 1 });
        assert_eq!(source.position(8), SourcePosition { line: 4, column: 2 });
    }

    #[test]
    fn test_position_many_lines() {
        let text = "x\n".repeat(10_000);
        let source = SourceText::new("<stdin>", text);

        for line in [1, 2, 5_000, 10_000] {
            assert_eq!(
                source.position((line - 1) * 2),
                SourcePosition { line, column: 1 }
            );
        }
        assert_eq!(
            source.position(usize::MAX),
            SourcePosition {
                line: 10_000,
                column: 2
            }
        );
    }

    #[test]
    fn test_position_empty() {
        let source = SourceText::new("<stdin>", "");
        assert_eq!(source.position(0), SourcePosition { line: 1, column: 1 });
    }
}
