//! Editor configuration bundled with the web build.
use once_cell::sync::Lazy;
use skuform_core::{ConfigSource, EditorConfig};
use thiserror::Error;

const EDITOR_JSON: &str = include_str!("../static/assets/data/editor.json");

static BUNDLED: Lazy<Result<EditorConfig, String>> =
    Lazy::new(|| EditorConfig::from_json(EDITOR_JSON).map_err(|err| err.to_string()));

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WebConfigError {
    #[error("bundled editor config is invalid: {0}")]
    Invalid(String),
}

/// Reads the configuration compiled into the bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticConfigSource;

impl ConfigSource for StaticConfigSource {
    type Error = WebConfigError;

    fn load_config(&self) -> Result<EditorConfig, Self::Error> {
        BUNDLED.clone().map_err(WebConfigError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = StaticConfigSource.load_config().unwrap();
        assert_eq!(config.preset_types, vec!["Color", "Style", "Font"]);
        assert_eq!(config.duplicate_suffix, " Duplicate");
        assert_eq!(config.max_character_limit, Some(255));
    }
}
