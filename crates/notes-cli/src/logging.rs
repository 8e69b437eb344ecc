//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with command output. `NOTES_LOG`
//! takes an `EnvFilter` directive and wins over `-v` flags.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Default filter for a given `-v` count.
fn level_for(verbosity: u8, quiet: bool) -> &'static str {
    match (quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    }
}

pub fn init_tracing(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity, quiet)));

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0, false), "warn");
        assert_eq!(level_for(1, false), "info");
        assert_eq!(level_for(3, false), "debug");
        assert_eq!(level_for(2, true), "error");
    }
}
