use super::dedent::dedent_comment_body;
use super::directive::qualify_directive;
use super::trim::trim_blank_lines;
use crate::NamespacePrefix;

/// A documentation comment, dedented and trimmed, ready to be emitted.
///
/// A `DocBlock` always has a title line; comments with no non-blank lines don't produce one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock {
    title: String,
    body: Vec<String>,
}

impl DocBlock {
    /// Construct a block from already-dedented lines.
    ///
    /// Leading and trailing blank lines are dropped. Returns `None` if every line is blank.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Option<Self> {
        let (title, body) = trim_blank_lines(lines).split_first()?;
        Some(Self {
            title: title.as_ref().to_owned(),
            body: body.iter().map(|line| line.as_ref().to_owned()).collect(),
        })
    }

    /// Construct a block from the body of a `/** ... */` comment, the text between the `/*` and
    /// `*/` delimiters.
    ///
    /// Returns `None` if the comment has no content besides `*` markers and whitespace.
    pub fn from_comment_body(body: &str) -> Option<Self> {
        Self::from_lines(&dedent_comment_body(body)?)
    }

    /// The first line, which is usually a directive like `function:: foo()`.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The lines after the title. Interior blank lines are kept; there are no trailing blank lines.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Qualify the directive in the title line with `prefix`, if any.
    ///
    /// Only the title is rewritten; a directive appearing later in the body is left as-is.
    pub fn qualify(mut self, prefix: Option<&NamespacePrefix>) -> Self {
        self.title = qualify_directive(&self.title, prefix).into_owned();
        self
    }
}
