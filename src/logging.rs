//! Log setup for the binaries.

use crate::config::LOG_ENV;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr fmt subscriber filtered by `PATTERNBOOK_LOG`.
///
/// Safe to call more than once; later calls are no-ops. Stdout stays reserved
/// for command output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
