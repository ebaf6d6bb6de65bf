//! TOML-based configuration.
//!
//! Describes which databases the embedding process exposes. The library
//! itself opens no connections; embedders read these settings, build one
//! provider per enabled entry, and register them.
//!
//! Example configuration:
//! ```toml
//! [databases.crm]
//! driver = "postgres"
//! connection_string = "${CRM_DB_CONNECTION_STRING}"
//! enabled = true
//! description = "Customer relationship data"
//!
//! [databases.billing]
//! driver = "sqlserver"
//! connection_string = "${BILLING_DB_CONNECTION_STRING}"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::metadata::{DatabaseKind, UnsupportedDriver};

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("database not configured: {0}")]
    DatabaseNotFound(String),

    #[error(transparent)]
    UnsupportedDriver(#[from] UnsupportedDriver),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Named database entries.
    pub databases: HashMap<String, DatabaseSettings>,
}

/// One configured database.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseSettings {
    /// Driver tag, e.g. `postgres`, `mssql`. Aliases accepted.
    pub driver: String,

    /// Connection string; `${VAR}` and `$VAR` are expanded at read time.
    pub connection_string: String,

    /// Disabled entries are kept in config but never exposed.
    #[serde(default)]
    pub enabled: bool,

    /// Optional human note about this database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DatabaseSettings {
    /// Engine kind parsed from the driver tag.
    pub fn kind(&self) -> Result<DatabaseKind, SettingsError> {
        Ok(self.driver.parse()?)
    }

    /// Connection string with environment variables expanded.
    pub fn expanded_connection_string(&self) -> Result<String, SettingsError> {
        expand_env_vars(&self.connection_string)
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse settings from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(contents)?)
    }

    /// Look up one database entry.
    pub fn database(&self, name: &str) -> Result<&DatabaseSettings, SettingsError> {
        self.databases
            .get(name)
            .ok_or_else(|| SettingsError::DatabaseNotFound(name.to_string()))
    }

    /// Enabled entries, name-sorted for deterministic listings.
    pub fn enabled_databases(&self) -> Vec<(&str, &DatabaseSettings)> {
        let mut enabled: Vec<(&str, &DatabaseSettings)> = self
            .databases
            .iter()
            .filter(|(_, db)| db.enabled)
            .map(|(name, db)| (name.as_str(), db))
            .collect();
        enabled.sort_by_key(|(name, _)| *name);
        enabled
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        if chars.peek() == Some(&'{') {
            chars.next(); // consume '{'
            let mut var_name = String::new();
            while let Some(&ch) = chars.peek() {
                if ch == '}' {
                    chars.next(); // consume '}'
                    break;
                }
                var_name.push(ch);
                chars.next();
            }
            let value =
                env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
            result.push_str(&value);
        } else {
            // $VAR ends at the first non-alphanumeric/underscore character
            let mut var_name = String::new();
            while let Some(&ch) = chars.peek() {
                if ch.is_alphanumeric() || ch == '_' {
                    var_name.push(ch);
                    chars.next();
                } else {
                    break;
                }
            }
            if var_name.is_empty() {
                // lone $, keep it
                result.push('$');
            } else {
                let value = env::var(&var_name)
                    .map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
                result.push_str(&value);
            }
        }
    }

    Ok(result)
}
