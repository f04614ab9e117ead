//! TOML-based configuration.
//!
//! Supports a config file (sqlscout.toml) with environment variable
//! expansion.
//!
//! Example configuration:
//! ```toml
//! catalog_snapshot = "./catalog.json"
//!
//! [connections.production]
//! driver = "mssql"
//! connection_string = "${PROD_DB_CONNECTION_STRING}"
//!
//! [connections.dev]
//! driver = "sqlite"
//! connection_string = "./data/dev.db"
//!
//! [filter]
//! fuzzy_threshold = 80
//! fallback_table_count = 5
//! full_columns_on_exact = true
//! synonyms_path = "./keywords.json"
//!
//! [filter.format]
//! relaxed = false
//! max_tables = 5
//! max_columns_per_table = 10
//!
//! [llm]
//! model = "gpt-3.5-turbo"
//! api_key = "${OPENAI_API_KEY}"
//! ```

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::filter::{FilterConfig, FormatConfig, SynonymError, SynonymMap};

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Connection not found: {0}")]
    ConnectionNotFound(String),

    #[error("Unsupported driver: {0}")]
    UnsupportedDriver(String),

    #[error("Failed to load synonyms: {0}")]
    Synonyms(#[from] SynonymError),
}

/// Database driver kinds the host application connects with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    Mssql,
    Postgres,
    Sqlite,
}

impl Driver {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mssql" | "sqlserver" => Some(Driver::Mssql),
            "postgres" | "postgresql" => Some(Driver::Postgres),
            "sqlite" => Some(Driver::Sqlite),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Driver::Mssql => "mssql",
            Driver::Postgres => "postgres",
            Driver::Sqlite => "sqlite",
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// JSON catalog snapshot used when no live connection is wired in.
    pub catalog_snapshot: Option<PathBuf>,

    /// Named database connections.
    pub connections: HashMap<String, ConnectionSettings>,

    /// Filtering configuration.
    pub filter: FilterSettings,

    /// Language-model configuration.
    pub llm: LlmSettings,
}

/// Connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectionSettings {
    /// Database driver (mssql, postgres, sqlite).
    pub driver: String,

    /// Connection string (supports ${ENV_VAR} expansion).
    pub connection_string: String,

    /// Default schema for this connection.
    #[serde(default)]
    pub default_schema: Option<String>,
}

impl ConnectionSettings {
    /// Get the driver type.
    pub fn driver_type(&self) -> Result<Driver, SettingsError> {
        Driver::parse(&self.driver)
            .ok_or_else(|| SettingsError::UnsupportedDriver(self.driver.clone()))
    }

    /// Get the connection string with environment variables expanded.
    pub fn resolved_connection_string(&self) -> Result<String, SettingsError> {
        expand_env_vars(&self.connection_string)
    }
}

/// Filtering configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Minimum token-sort ratio for the fuzzy tiers (inclusive).
    pub fuzzy_threshold: u32,

    /// Tables taken from the catalog head when no tier matches.
    pub fallback_table_count: usize,

    /// Columns taken from a table's head when no column tier matches.
    pub column_fallback_count: usize,

    /// Keep full column lists for exact-tier table matches.
    pub full_columns_on_exact: bool,

    /// Optional JSON file mapping user terms to schema terms.
    pub synonyms_path: Option<PathBuf>,

    /// Rendering caps.
    pub format: FormatSettings,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 80,
            fallback_table_count: 5,
            column_fallback_count: 5,
            full_columns_on_exact: true,
            synonyms_path: None,
            format: FormatSettings::default(),
        }
    }
}

impl FilterSettings {
    /// Build the runtime [`FilterConfig`], loading the synonym file if one
    /// is configured.
    pub fn to_config(&self) -> Result<FilterConfig, SettingsError> {
        let synonyms = match &self.synonyms_path {
            Some(path) => SynonymMap::load(path)?,
            None => SynonymMap::default(),
        };

        Ok(FilterConfig {
            fuzzy_threshold: self.fuzzy_threshold,
            fallback_table_count: self.fallback_table_count,
            column_fallback_count: self.column_fallback_count,
            full_columns_on_exact: self.full_columns_on_exact,
            format: self.format.to_config(),
            synonyms,
        })
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FormatSettings {
    /// Drop all caps (callers without a transport budget).
    pub relaxed: bool,

    /// Maximum tables rendered in the capped variant.
    pub max_tables: usize,

    /// Maximum columns per table in the capped variant.
    pub max_columns_per_table: usize,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            relaxed: false,
            max_tables: 5,
            max_columns_per_table: 10,
        }
    }
}

impl FormatSettings {
    pub fn to_config(&self) -> FormatConfig {
        if self.relaxed {
            FormatConfig::relaxed()
        } else {
            FormatConfig {
                max_tables: Some(self.max_tables),
                max_columns_per_table: Some(self.max_columns_per_table),
            }
        }
    }
}

/// Language-model configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Model identifier passed to the generator implementation.
    pub model: String,

    /// API key (supports ${ENV_VAR} expansion).
    pub api_key: Option<String>,

    /// Sampling temperature.
    pub temperature: f64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            api_key: None,
            temperature: 0.1,
        }
    }
}

impl LlmSettings {
    /// Get the API key with environment variables expanded.
    pub fn resolved_api_key(&self) -> Result<Option<String>, SettingsError> {
        self.api_key.as_deref().map(expand_env_vars).transpose()
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `SQLSCOUT_CONFIG`
    /// 2. `./sqlscout.toml`
    /// 3. Built-in defaults
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("SQLSCOUT_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("sqlscout.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        Ok(Settings::default())
    }

    /// Get a connection by name.
    pub fn get_connection(&self, name: &str) -> Result<&ConnectionSettings, SettingsError> {
        self.connections
            .get(name)
            .ok_or_else(|| SettingsError::ConnectionNotFound(name.to_string()))
    }

    /// Get the default connection ("default" if present, else the first one).
    pub fn default_connection(&self) -> Option<(&str, &ConnectionSettings)> {
        if let Some(conn) = self.connections.get("default") {
            return Some(("default", conn));
        }
        self.connections.iter().next().map(|(k, v)| (k.as_str(), v))
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' {
            if chars.peek() == Some(&'{') {
                chars.next();
                let mut var_name = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch == '}' {
                        chars.next();
                        break;
                    }
                    var_name.push(ch);
                    chars.next();
                }
                let value = env::var(&var_name)
                    .map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
                result.push_str(&value);
            } else {
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
                    // Just a lone $, keep it
                    result.push('$');
                } else {
                    let value = env::var(&var_name)
                        .map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
                    result.push_str(&value);
                }
            }
        } else {
            result.push(c);
        }
    }

    Ok(result)
}
