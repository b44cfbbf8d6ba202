//! Editor configuration.
use serde::{Deserialize, Serialize};

/// Default suffix appended to the name of a duplicated option.
pub const DUPLICATE_SUFFIX: &str = " Duplicate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Preset option types offered before the two sentinels.
    pub preset_types: Vec<String>,
    /// Appended to the source name when an option is duplicated.
    pub duplicate_suffix: String,
    /// Upper bound for a Custom Text character limit, if any.
    pub max_character_limit: Option<u32>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl EditorConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            preset_types: vec!["Color".to_string(), "Style".to_string(), "Font".to_string()],
            duplicate_suffix: DUPLICATE_SUFFIX.to_string(),
            max_character_limit: None,
        }
    }

    /// Parse a configuration document; missing fields fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config unavailable: {0}")]
    Unavailable(String),
}

/// Abstracts where the editor configuration comes from.
/// Platform-specific crates provide the implementation.
pub trait ConfigSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the editor configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or parsed.
    fn load_config(&self) -> Result<EditorConfig, Self::Error>;
}

/// Source that always yields the built-in defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfigSource;

impl ConfigSource for DefaultConfigSource {
    type Error = std::convert::Infallible;

    fn load_config(&self) -> Result<EditorConfig, Self::Error> {
        Ok(EditorConfig::default_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EditorConfig::from_json(r#"{ "max_character_limit": 40 }"#).unwrap();
        assert_eq!(config.max_character_limit, Some(40));
        assert_eq!(config.duplicate_suffix, DUPLICATE_SUFFIX);
        assert_eq!(config.preset_types, vec!["Color", "Style", "Font"]);
    }

    #[test]
    fn preset_list_can_be_replaced() {
        let config = EditorConfig::from_json(r#"{ "preset_types": ["Size", "Material"] }"#).unwrap();
        assert_eq!(config.preset_types, vec!["Size", "Material"]);
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = EditorConfig::from_json("{ preset_types: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn default_source_yields_defaults() {
        let config = DefaultConfigSource.load_config().unwrap();
        assert_eq!(config, EditorConfig::default_config());
    }
}
