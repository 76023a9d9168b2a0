//! `jsdoc-rst` extracts `/** ... */` documentation comments from JavaScript source and renders
//! them as reStructuredText directive blocks, ready to be included in a Sphinx project.
//!
//! Each documentation comment is dedented, trimmed of blank lines, and written as a `..  `
//! directive with its remaining lines indented underneath. When a namespace prefix is given, the
//! identifier in a leading directive line like `function:: foo(bar)` is qualified with it.
//!
//! Note that the `jsdoc-rst` Rust library is a convenience for the binary and its tests, not a
//! stable API.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod clap;
pub mod cli;
mod namespace;
pub mod render;
mod source;
mod tracing;

pub use namespace::NamespacePrefix;
pub use namespace::NamespacePrefixError;
pub use render::render_docs;
pub use render::DocBlock;
pub use render::RenderOpts;
pub use source::CommentExtractor;
pub use source::CommentKind;
pub use source::CommentRecord;
pub use source::JavaScriptComments;
pub use source::SourcePosition;
pub use source::SourceText;
pub use tracing::TracingOpts;

#[cfg(test)]
mod fake_extractor;
