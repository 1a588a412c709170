//! Archway CLI binary.

use anyhow::Result;
use archway::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the archway CLI.
///
/// The layout computation is a synchronous pure function, so the binary is
/// plain blocking code: read a payload, compute, print.
fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=archway=debug,archway_layout=trace archway layout deps.json
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("archway=warn,archway_layout=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    cli.execute()
}
