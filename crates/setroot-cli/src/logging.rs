//! Logging setup for the generator binary.
//!
//! Diagnostics go to stderr via `tracing`: which declarations were selected,
//! which were skipped, and which field shapes went unrecognized. The tool
//! takes no flags or environment configuration, so the level is fixed.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;

/// Install the stderr logger at a fixed INFO level.
pub fn init() {
    fmt()
        .with_max_level(LevelFilter::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
