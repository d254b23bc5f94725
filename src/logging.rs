//! Logging bootstrap.
//!
//! Logs go to stderr so they never mix with command output on stdout.
//! The filter comes from `TODOTXT_LOG` (`EnvFilter` syntax) when set.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TODOTXT_LOG";

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(verbose: bool) {
    let level = if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL };
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
