//! Reading `lcrun.toml`
//!
//! The config crate merges the file over the serde defaults; values the
//! types cannot express are checked afterwards in `validate`.

use std::path::Path;

use config::{Config as ConfigBuilder, File, FileFormat};

use crate::config::{Config, ConfigError, KNOWN_SHORTCUTS};

impl Config {
    /// Load and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = ConfigBuilder::builder()
            .add_source(File::from(path))
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let config = ConfigBuilder::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that deserialize but make no sense
    fn validate(&self) -> Result<(), ConfigError> {
        if self.output_channel.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "output_channel must not be empty".to_owned(),
            ));
        }

        for shortcut in &self.shortcuts {
            if !KNOWN_SHORTCUTS.contains(&shortcut.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "unknown shortcut '{shortcut}' (expected one of: {})",
                    KNOWN_SHORTCUTS.join(", ")
                )));
            }
        }

        Ok(())
    }
}
