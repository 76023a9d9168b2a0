//! Extensions and utilities for the [`tracing`] crate.

use miette::IntoDiagnostic;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;

use crate::cli::Opts;

/// Options for [`TracingOpts::install`].
#[derive(Debug, Clone)]
pub struct TracingOpts {
    /// [`EnvFilter`] directives.
    pub filter_directives: String,
}

impl TracingOpts {
    /// Construct options for initializing the logging framework from the CLI options.
    pub fn from_cli(opts: &Opts) -> Self {
        Self {
            filter_directives: opts.logging.tracing_filter.clone(),
        }
    }

    /// Initialize the logging framework.
    ///
    /// Logs go to stderr; stdout is reserved for the rendered documentation.
    pub fn install(&self) -> miette::Result<()> {
        let env_filter = EnvFilter::try_new(&self.filter_directives)
            .or_else(|_| EnvFilter::try_from_default_env())
            .or_else(|_| EnvFilter::try_new("warn"))
            .into_diagnostic()?;

        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .with_filter(env_filter);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .into_diagnostic()?;

        Ok(())
    }
}
