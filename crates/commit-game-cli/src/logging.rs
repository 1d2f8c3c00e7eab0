//! Logging configuration

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging with the specified filter.
///
/// Logs go to stderr; stdout carries the game itself.
pub fn init(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| anyhow::anyhow!("Invalid log filter {:?}: {}", level, e))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to init logging: {}", e))?;

    Ok(())
}
