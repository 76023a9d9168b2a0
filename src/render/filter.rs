use crate::CommentKind;
use crate::CommentRecord;

/// The character that marks a block comment as documentation when it immediately follows the
/// opening delimiter, as in `/**`.
pub const DOC_MARKER: char = '*';

/// Is this a documentation comment (a block comment opened with `/**`)?
pub fn is_doc_comment(comment: &CommentRecord) -> bool {
    comment.kind == CommentKind::Block && comment.body.starts_with(DOC_MARKER)
}

/// Keep only the documentation comments, in order. Everything else is dropped silently.
pub fn doc_comments(
    comments: impl IntoIterator<Item = CommentRecord>,
) -> impl Iterator<Item = CommentRecord> {
    comments.into_iter().filter(|comment| {
        let keep = is_doc_comment(comment);
        if !keep {
            tracing::trace!(kind = %comment.kind, span = ?comment.span, "Skipping comment");
        }
        keep
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_is_doc_comment() {
        assert!(is_doc_comment(&CommentRecord::new(
            CommentKind::Block,
            "* Doc ",
            0..10
        )));
        assert!(is_doc_comment(&CommentRecord::new(
            CommentKind::Block,
            "*\n * function:: foo()\n ",
            0..26
        )));

        // Negative cases.
        // Plain block comment.
        assert!(!is_doc_comment(&CommentRecord::new(
            CommentKind::Block,
            " plain ",
            0..11
        )));
        // `/* *` isn't `/**`.
        assert!(!is_doc_comment(&CommentRecord::new(
            CommentKind::Block,
            " * almost",
            0..13
        )));
        // `/**/` is empty.
        assert!(!is_doc_comment(&CommentRecord::new(
            CommentKind::Block,
            "",
            0..4
        )));
        // `//*` is a line comment.
        assert!(!is_doc_comment(&CommentRecord::new(
            CommentKind::Line,
            "* line",
            0..8
        )));
    }

    #[test]
    fn test_doc_comments() {
        let comments = vec![
            CommentRecord::new(CommentKind::Line, " one", 0..6),
            CommentRecord::new(CommentKind::Block, "* two ", 7..17),
            CommentRecord::new(CommentKind::Block, " three ", 18..29),
            CommentRecord::new(CommentKind::Block, "** four ", 30..42),
        ];

        assert_eq!(
            doc_comments(comments).collect::<Vec<_>>(),
            vec![
                CommentRecord::new(CommentKind::Block, "* two ", 7..17),
                CommentRecord::new(CommentKind::Block, "** four ", 30..42),
            ]
        );
        assert_eq!(doc_comments(vec![]).count(), 0);
    }
}
