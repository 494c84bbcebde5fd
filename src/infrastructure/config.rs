use crate::domain::config::SeedingConfig;
use crate::domain::error::{SeedingError, SeedingResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Project configuration location, relative to a project directory
const PROJECT_CONFIG: [&str; 2] = [".trenako", "seeding.toml"];

/// Configuration manager
pub struct ConfigManager {
    global_config_path: Option<PathBuf>,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> Self {
        let global_config_path = Self::get_global_config_path();
        let project_config_path = std::env::current_dir()
            .ok()
            .and_then(|dir| Self::find_project_config_path(&dir));

        Self {
            global_config_path,
            project_config_path,
        }
    }

    /// Configuration manager with explicit locations
    pub fn with_paths(global: Option<PathBuf>, project: Option<PathBuf>) -> Self {
        Self {
            global_config_path: global,
            project_config_path: project,
        }
    }

    /// Load configuration from files
    pub fn load_config(&self) -> SeedingResult<SeedingConfig> {
        // Start with default configuration
        let mut config = SeedingConfig::default();

        // Values are checked once the layers are merged
        if let Some(global_path) = self.global_config_path.as_deref().filter(|p| p.exists()) {
            let content = read_config(global_path)?;
            config = parse_config(global_path, &content)?;
            tracing::trace!("Loaded global configuration from {}", global_path.display());
        }

        // Project settings override the global ones section by section
        if let Some(project_path) = self.project_config_path.as_deref().filter(|p| p.exists()) {
            let content = read_config(project_path)?;
            let table: toml::Table = parse_config(project_path, &content)?;
            let project: SeedingConfig = parse_config(project_path, &content)?;
            if table.contains_key("logging") {
                config.logging = project.logging;
            }
            if table.contains_key("dataset") {
                config.dataset = project.dataset;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> SeedingResult<SeedingConfig> {
        let content = read_config(path)?;
        let config: SeedingConfig = parse_config(path, &content)?;
        tracing::trace!("Loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Get global configuration path
    fn get_global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| {
            home.join(".config")
                .join("trenako-seeding")
                .join("config.toml")
        })
    }

    /// Find project configuration path by walking up directory tree
    pub fn find_project_config_path(start: &Path) -> Option<PathBuf> {
        let mut path = start;

        loop {
            let config_path = path.join(PROJECT_CONFIG[0]).join(PROJECT_CONFIG[1]);
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn read_config(path: &Path) -> SeedingResult<String> {
    fs::read_to_string(path).map_err(|e| SeedingError::Config {
        message: format!("Failed to read config file {}: {}", path.display(), e),
    })
}

fn parse_config<T: serde::de::DeserializeOwned>(path: &Path, content: &str) -> SeedingResult<T> {
    toml::from_str(content).map_err(|e| SeedingError::Config {
        message: format!("Failed to parse config file {}: {}", path.display(), e),
    })
}
