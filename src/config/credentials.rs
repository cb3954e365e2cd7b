//! Notion credentials, read from the process environment once at startup

use crate::config::types::NotionConfig;
use crate::ConfigError;
use std::fmt;

/// Bearer token and destination database for page creation
#[derive(Clone)]
pub struct Credentials {
    pub token: String,
    pub database_id: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            database_id: database_id.into(),
        }
    }

    /// Reads both values from the variables named in the Notion config
    ///
    /// A `.env` file is loaded by the binary before this is called, so values
    /// defined there are visible here as ordinary environment variables.
    pub fn from_env(config: &NotionConfig) -> Result<Self, ConfigError> {
        Self::from_lookup(config, |name| std::env::var(name).ok())
    }

    /// Resolves credentials through an arbitrary lookup function
    pub fn from_lookup<F>(config: &NotionConfig, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::MissingEnv(name.to_string()))
        };

        Ok(Self {
            token: read(&config.token_env)?,
            database_id: read(&config.database_id_env)?,
        })
    }
}

// The token never reaches logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("database_id", &self.database_id)
            .finish()
    }
}
