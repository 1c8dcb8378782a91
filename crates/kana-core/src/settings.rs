//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::codec::Encoding;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get_or_init(|| DEFAULT_SETTINGS_TOML.to_string())
            .as_str();
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub text: TextSettings,
    pub romanize: RomanizeSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextSettings {
    encoding: String,
    /// Resolved from `encoding` at parse time.
    #[serde(skip)]
    encoding_parsed: Encoding,
}

impl TextSettings {
    pub fn encoding(&self) -> Encoding {
        self.encoding_parsed
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RomanizeSettings {
    pub emit_diagnostics: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    s.text.encoding_parsed =
        Encoding::from_label(&s.text.encoding).map_err(|e| SettingsError::InvalidValue {
            field: "text.encoding".to_string(),
            reason: e.to_string(),
        })?;
    Ok(s)
}
