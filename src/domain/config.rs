use crate::domain::error::{SeedingError, SeedingResult};
use serde::{Deserialize, Serialize};

/// Log levels accepted in the `[logging]` section.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// trenako-seeding configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedingConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Dataset traversal configuration
    #[serde(default)]
    pub dataset: DatasetConfig,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Dataset settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Maximum directory depth below the dataset root
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Follow symbolic links while walking
    #[serde(default)]
    pub follow_links: bool,
    /// Check references between resources
    #[serde(default = "default_check_references")]
    pub check_references: bool,
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_max_depth() -> usize {
    4
}

fn default_check_references() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            follow_links: false,
            check_references: default_check_references(),
        }
    }
}

impl SeedingConfig {
    /// Reject values that parse but make no sense.
    pub fn validate(&self) -> SeedingResult<()> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(SeedingError::Config {
                message: format!(
                    "unknown log level '{}' (expected one of: {})",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        if self.dataset.max_depth == 0 {
            return Err(SeedingError::Config {
                message: "dataset.max_depth must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
