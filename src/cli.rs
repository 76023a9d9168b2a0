//! Command-line argument parser and argument access.

use camino::Utf8PathBuf;
use clap::Parser;

use crate::NamespacePrefix;

/// Extract `/** ... */` documentation comments from JavaScript and render them as
/// reStructuredText.
///
/// Reads source from standard input and writes one directive block per documentation comment to
/// standard output, in source order.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
#[command(max_term_width = 100)]
pub struct Opts {
    /// A dotted namespace to qualify documented identifiers with, e.g. `mypkg.util`.
    ///
    /// When given, a directive line like `function:: foo(bar)` is rewritten to
    /// `function:: mypkg.util.foo(bar)`, and a bare `module::` to `module:: mypkg.util`.
    #[arg(value_name = "PREFIX")]
    pub prefix: Option<NamespacePrefix>,

    /// Read source from this file instead of standard input.
    #[arg(long, value_name = "PATH")]
    pub input: Option<Utf8PathBuf>,

    /// Options to modify logging behavior.
    #[command(flatten)]
    pub logging: LoggingOpts,
}

/// Options to modify logging behavior.
#[derive(Debug, Clone, clap::Args)]
#[clap(next_help_heading = "Logging options")]
pub struct LoggingOpts {
    #[allow(rustdoc::bare_urls)]
    /// Tracing filter.
    ///
    /// Can be any of "error", "warn", "info", "debug", or
    /// "trace". Supports more granular filtering, as well.
    /// See: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html
    ///
    /// Logs are written to stderr. A nice value is "jsdoc_rst=debug".
    #[arg(long, env = "JSDOC_RST_LOG", default_value = "jsdoc_rst=warn")]
    pub tracing_filter: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_asserts() {
        Opts::command().debug_assert();
    }

    #[test]
    fn test_parse_input() {
        let opts = Opts::try_parse_from(["jsdoc-rst", "--input", "src/puppy.js", "pkg"]).unwrap();
        assert_eq!(opts.input, Some(Utf8PathBuf::from("src/puppy.js")));
        assert_eq!(opts.prefix.unwrap().as_str(), "pkg");

        let opts = Opts::try_parse_from(["jsdoc-rst"]).unwrap();
        assert_eq!(opts.input, None);
    }
}
