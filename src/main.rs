//! `jsdoc-rst` reads JavaScript from standard input and writes the reStructuredText rendering of
//! its documentation comments to standard output.

use std::io::BufWriter;
use std::io::Write;

use clap::Parser;
use jsdoc_rst::cli;
use jsdoc_rst::render_docs;
use jsdoc_rst::JavaScriptComments;
use jsdoc_rst::RenderOpts;
use jsdoc_rst::SourceText;
use jsdoc_rst::TracingOpts;
use miette::IntoDiagnostic;
use miette::WrapErr;

fn main() -> miette::Result<()> {
    miette::set_panic_hook();
    let opts = cli::Opts::parse();
    TracingOpts::from_cli(&opts).install()?;

    let source = SourceText::from_cli(&opts)?;
    let render_opts = RenderOpts::from_cli(&opts);

    let mut out = BufWriter::new(std::io::stdout().lock());
    let blocks = render_docs(&JavaScriptComments, &source, &render_opts, &mut out)?;
    out.flush()
        .into_diagnostic()
        .wrap_err("Failed to write documentation")?;

    ::tracing::debug!(blocks, source = source.name(), "Done");

    Ok(())
}
