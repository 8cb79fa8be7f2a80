use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_DIR};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory for persisted tokens, relative to the config directory
    pub token_dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_dir: String::from(DEFAULT_TOKEN_DIR),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.token_dir.trim().is_empty() {
            return Err(ConfigError::session("session.token_dir cannot be empty"));
        }

        if Path::new(&self.token_dir).is_absolute() || self.token_dir.contains("..") {
            return Err(ConfigError::session(
                "session.token_dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
