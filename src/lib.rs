// Iconfix - rewrites guarded icon component renders into static inline markup

pub mod rewrite;
pub mod utils;

use anyhow::Result;
use tracing::info;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging with default settings (plain output, no colors)
pub fn init() -> Result<()> {
    init_with_logger(false)
}

/// Initialize logging with custom configuration
///
/// @param ansi_colors - Whether to enable ANSI color codes in logs
/// Logs always go to stderr; stdout carries nothing but the final
/// confirmation line.
pub fn init_with_logger(ansi_colors: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    fmt::Subscriber::builder()
        .with_ansi(ansi_colors)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    info!("Initializing iconfix v{}", version());

    Ok(())
}
