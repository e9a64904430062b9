//! Configuration
//!
//! Shell configuration loaded from an optional config.toml with
//! USER_REGISTRY_* environment overrides.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// File read by the IMPORT command when no path is given
    pub import_file: String,

    /// Maximum accepted length for a single command line
    pub max_command_length: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            import_file: "users.csv".to_string(),
            max_command_length: 512,
        }
    }
}

impl AppConfig {
    /// Loads configuration, falling back to defaults when no config.toml
    /// is present.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();
        let settings = Config::builder()
            .set_default("import_file", defaults.import_file)?
            .set_default("max_command_length", defaults.max_command_length as u64)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("USER_REGISTRY"))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.import_file.is_empty() {
            return Err(ConfigError::Message("import_file cannot be empty".into()));
        }
        if self.max_command_length == 0 {
            return Err(ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
