//! The `.env` artifact consumed by the web application.
//!
//! Entries keep insertion order and are rendered as `KEY=value` lines joined
//! by `\n`, without a trailing newline. Writing always replaces the whole
//! file.

use std::path::Path;

use tracing::info;

use crate::error::{SetupError, SetupResult};

pub const DATABASE_URL_KEY: &str = "TURSO_DATABASE_URL";
pub const STRIPE_SECRET_KEY: &str = "STRIPE_SECRET_KEY";
pub const STRIPE_WEBHOOK_SECRET_KEY: &str = "STRIPE_WEBHOOK_SECRET";
pub const BASE_URL_KEY: &str = "BASE_URL";
pub const AUTH_SECRET_KEY: &str = "AUTH_SECRET";
pub const DATABASE_AUTH_TOKEN_KEY: &str = "TURSO_AUTH_TOKEN";

pub const DEFAULT_FILE_NAME: &str = ".env";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvConfig {
    entries: Vec<(String, String)>,
}

impl EnvConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, replacing its value in place if it already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn validate(&self) -> SetupResult<()> {
        for (key, value) in &self.entries {
            if value.contains(['\n', '\r']) {
                return Err(SetupError::InvalidValue {
                    key: key.clone(),
                    reason: "value spans more than one line".to_string(),
                });
            }
        }
        Ok(())
    }
}

pub fn write_env_file(path: &Path, config: &EnvConfig) -> SetupResult<()> {
    config.validate()?;
    std::fs::write(path, config.render()).map_err(|source| SetupError::Filesystem {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), entries = config.len(), "environment file written");
    Ok(())
}
