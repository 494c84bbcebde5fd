// Logging module - Logging infrastructure
use crate::domain::config::LoggingConfig;
use crate::domain::error::{SeedingError, SeedingResult};
use crate::domain::options::CommandOptions;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pick the log level for this run, or `None` when logging is off.
pub fn resolve_level(options: &CommandOptions, config: &LoggingConfig) -> Option<String> {
    if options.quiet {
        None
    } else if options.verbose {
        Some("debug".to_string())
    } else {
        Some(config.level.to_ascii_lowercase())
    }
}

/// Build the filter directive for a crate log level. `RUST_LOG` wins when set.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,trenako_seeding={}", level)))
}

/// Initialize logging system
pub fn init_logging(level: &str) -> SeedingResult<()> {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .try_init()
        .map_err(|e| SeedingError::Config {
            message: format!("Failed to initialize logging: {}", e),
        })?;

    tracing::trace!("trenako-seeding logging initialized at level {}", level);
    Ok(())
}
