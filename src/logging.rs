//! Logging configuration and initialization

use tracing::{debug, trace};

/// Log filter for a verbosity count, falling back to the configured level
pub fn log_filter(verbose: u8, configured_level: &str) -> String {
    match verbose {
        0 => configured_level.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Initialize tracing for the binary
pub fn init_logging(verbose: u8, configured_level: &str) {
    let filter = log_filter(verbose, configured_level);

    tracing_subscriber::fmt()
        .with_env_filter(filter.as_str())
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("roster started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
