//! The dotted namespace documented identifiers are qualified with.

use std::fmt::Display;
use std::ops::Range;
use std::str::FromStr;

/// A dotted namespace path like `mypkg.util`, prepended to the identifiers in directive lines.
///
/// Never empty, never contains whitespace, and never has an empty segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacePrefix(String);

impl NamespacePrefix {
    /// Validate a namespace prefix.
    pub fn new(prefix: impl Into<String>) -> Result<Self, NamespacePrefixError> {
        let prefix = prefix.into();

        if prefix.is_empty() {
            return Err(NamespacePrefixError::Empty);
        }

        if let Some((offset, c)) = prefix.char_indices().find(|(_, c)| c.is_whitespace()) {
            return Err(NamespacePrefixError::Whitespace {
                span: offset..offset + c.len_utf8(),
            });
        }

        let mut offset = 0;
        for segment in prefix.split('.') {
            if segment.is_empty() {
                return Err(NamespacePrefixError::EmptySegment { offset });
            }
            offset += segment.len() + 1;
        }

        Ok(Self(prefix))
    }

    /// The prefix as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for NamespacePrefix {
    type Err = NamespacePrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for NamespacePrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NamespacePrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Why a string isn't a valid [`NamespacePrefix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespacePrefixError {
    /// The prefix is empty.
    Empty,
    /// The prefix contains whitespace at the given byte span.
    Whitespace {
        /// The byte span of the whitespace character.
        span: Range<usize>,
    },
    /// The prefix has an empty dotted segment starting at the given byte offset, from a leading,
    /// trailing, or doubled `.`.
    EmptySegment {
        /// The byte offset the empty segment starts at.
        offset: usize,
    },
}

impl Display for NamespacePrefixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamespacePrefixError::Empty => write!(f, "Namespace prefix is empty"),
            NamespacePrefixError::Whitespace { .. } => {
                write!(f, "Namespace prefix contains whitespace")
            }
            NamespacePrefixError::EmptySegment { .. } => {
                write!(f, "Namespace prefix has an empty segment")
            }
        }
    }
}

impl std::error::Error for NamespacePrefixError {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_namespace_prefix() {
        assert_eq!("mypkg".parse::<NamespacePrefix>().unwrap().as_str(), "mypkg");
        assert_eq!(
            "foo.bar".parse::<NamespacePrefix>().unwrap().to_string(),
            "foo.bar"
        );
        assert_eq!(
            "$.fn_1.Puppy".parse::<NamespacePrefix>().unwrap().as_ref(),
            "$.fn_1.Puppy"
        );

        // Negative cases.
        assert_eq!(NamespacePrefix::new(""), Err(NamespacePrefixError::Empty));
        assert_eq!(
            NamespacePrefix::new("foo bar"),
            Err(NamespacePrefixError::Whitespace { span: 3..4 })
        );
        assert_eq!(
            NamespacePrefix::new("foo\u{a0}"),
            Err(NamespacePrefixError::Whitespace { span: 3..5 })
        );
        assert_eq!(
            NamespacePrefix::new(".foo"),
            Err(NamespacePrefixError::EmptySegment { offset: 0 })
        );
        assert_eq!(
            NamespacePrefix::new("foo..bar"),
            Err(NamespacePrefixError::EmptySegment { offset: 4 })
        );
        assert_eq!(
            NamespacePrefix::new("foo.bar."),
            Err(NamespacePrefixError::EmptySegment { offset: 8 })
        );
        assert_eq!(
            NamespacePrefix::new("."),
            Err(NamespacePrefixError::EmptySegment { offset: 0 })
        );
    }
}
