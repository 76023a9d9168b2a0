use miette::miette;

use crate::CommentExtractor;
use crate::CommentRecord;

/// A fake [`CommentExtractor`] for testing.
///
/// A `FakeExtractor` ignores the source it's given and reports a fixed list of comments, or fails
/// with a fixed message. This lets the rendering pipeline be tested without writing JavaScript
/// that tokenizes into exactly the comments wanted.
#[derive(Debug, Clone)]
pub struct FakeExtractor {
    result: Result<Vec<CommentRecord>, String>,
}

impl FakeExtractor {
    /// Construct a `FakeExtractor` that reports these comments.
    pub fn with_comments(comments: impl IntoIterator<Item = CommentRecord>) -> Self {
        Self {
            result: Ok(comments.into_iter().collect()),
        }
    }

    /// Construct a `FakeExtractor` that fails with this message.
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            result: Err(message.into()),
        }
    }
}

impl CommentExtractor for FakeExtractor {
    fn extract_comments(&self, _source: &str) -> miette::Result<Vec<CommentRecord>> {
        match &self.result {
            Ok(comments) => Ok(comments.clone()),
            Err(message) => Err(miette!("{}", message)),
        }
    }
}
