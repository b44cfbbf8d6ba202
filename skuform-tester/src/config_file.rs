use std::path::{Path, PathBuf};

use skuform_core::{ConfigError, ConfigSource, EditorConfig};

/// Reads an `EditorConfig` JSON document from disk.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfigSource {
    type Error = ConfigError;

    fn load_config(&self) -> Result<EditorConfig, Self::Error> {
        let json = std::fs::read_to_string(&self.path)
            .map_err(|err| ConfigError::Unavailable(format!("{}: {err}", self.path.display())))?;
        EditorConfig::from_json(&json)
    }
}
