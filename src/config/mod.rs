//! Configuration module.
//!
//! TOML settings with environment variable expansion: named database
//! connections for the host application, filter tuning, and the
//! language-model section.

mod settings;

pub use settings::{
    expand_env_vars, ConnectionSettings, Driver, FilterSettings, FormatSettings, LlmSettings,
    Settings, SettingsError,
};
