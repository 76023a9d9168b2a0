//! reStructuredText directive lines like `function:: foo(bar)`.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::NamespacePrefix;

static DIRECTIVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([a-z:]+::)(.*)").unwrap());

/// A directive line: a lowercase `name::` optionally followed by an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    /// The directive name, including the trailing `::`, like `function::`.
    pub name: &'a str,
    /// The documented identifier after the directive name, trimmed. `None` if there's nothing
    /// but whitespace.
    pub identifier: Option<&'a str>,
}

impl<'a> Directive<'a> {
    /// Parse a directive line, or `None` if the line isn't one.
    pub fn parse(line: &'a str) -> Option<Self> {
        let captures = DIRECTIVE_RE.captures(line)?;
        let name = captures.get(1)?.as_str();
        let identifier = captures
            .get(2)
            .map(|remainder| remainder.as_str().trim())
            .filter(|identifier| !identifier.is_empty());
        Some(Self { name, identifier })
    }

    /// Render this directive with its identifier qualified by `prefix`.
    pub fn qualified(&self, prefix: &NamespacePrefix) -> String {
        match self.identifier {
            Some(identifier) => format!("{} {prefix}.{identifier}", self.name),
            None => format!("{} {prefix}", self.name),
        }
    }
}

/// Qualify the identifier in a directive line with `prefix`.
///
/// Lines which aren't directives, and all lines when there's no prefix, are returned unchanged.
pub fn qualify_directive<'a>(line: &'a str, prefix: Option<&NamespacePrefix>) -> Cow<'a, str> {
    let Some(prefix) = prefix else {
        return Cow::Borrowed(line);
    };

    match Directive::parse(line) {
        Some(directive) => Cow::Owned(directive.qualified(prefix)),
        None => {
            tracing::trace!(line, "Not a directive line, leaving it unqualified");
            Cow::Borrowed(line)
        }
    }
}
