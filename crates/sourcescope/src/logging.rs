use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

pub(crate) const LOG_VAR: &str = "SOURCESCOPE_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";
const VERBOSE_DIRECTIVE: &str = "debug";

/// Installs the stderr subscriber. `verbose` takes precedence over `SOURCESCOPE_LOG`.
pub(crate) fn init(verbose: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_target(verbose)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);
    subscriber.try_init().ok();
}

fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_DIRECTIVE);
    }
    EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}
