//! Turning documentation comments into reStructuredText.

mod dedent;
mod directive;
mod doc_block;
mod emit;
mod filter;
mod trim;

use std::io::Write;

use crate::cli::Opts;
use crate::CommentExtractor;
use crate::NamespacePrefix;
use crate::SourceText;

pub use dedent::dedent;
pub use directive::qualify_directive;
pub use directive::Directive;
pub use doc_block::DocBlock;
pub use emit::emit;
pub use filter::doc_comments;
pub use filter::is_doc_comment;
pub use trim::trim_blank_lines;

/// Options for rendering documentation.
#[derive(Debug, Clone, Default)]
pub struct RenderOpts {
    /// The namespace to qualify directive identifiers with.
    pub prefix: Option<NamespacePrefix>,
}

impl RenderOpts {
    /// Construct the rendering options from the command-line options.
    pub fn from_cli(opts: &Opts) -> Self {
        Self {
            prefix: opts.prefix.clone(),
        }
    }
}

/// Extract the documentation comments from `source` and write them to `out` as
/// reStructuredText, in source order.
///
/// The whole source is scanned before anything is written, so a source that fails to tokenize
/// produces no output at all. Returns the number of blocks written.
#[tracing::instrument(level = "debug", skip_all, fields(source = source.name()))]
pub fn render_docs(
    extractor: &impl CommentExtractor,
    source: &SourceText,
    opts: &RenderOpts,
    out: &mut impl Write,
) -> miette::Result<usize> {
    let comments = extractor
        .extract_comments(source.text())
        .map_err(|report| report.with_source_code(source.named_source()))?;
    let total = comments.len();

    let mut written = 0;
    for comment in doc_comments(comments) {
        let position = source.position(comment.span.start);
        let block = match DocBlock::from_comment_body(&comment.body) {
            Some(block) => block.qualify(opts.prefix.as_ref()),
            None => {
                tracing::trace!(%position, "Skipping blank documentation comment");
                continue;
            }
        };
        tracing::debug!(%position, title = block.title(), "Writing documentation block");
        emit(out, &block)?;
        written += 1;
    }

    tracing::debug!(comments = total, blocks = written, "Rendered documentation");
    Ok(written)
}
