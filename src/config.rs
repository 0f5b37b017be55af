use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::KartFinderError;

const CONFIG_DIR_NAME: &str = "kartfinder";
const CONFIG_FILE_NAME: &str = "config.json";

/// Colour scheme used when rendering results to the terminal.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// User preferences persisted between runs.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
}

impl AppConfig {
    /// Location of the config file in the platform config directory.
    pub fn default_path() -> Result<PathBuf, KartFinderError> {
        Ok(dirs::config_dir()
            .ok_or(KartFinderError::NoConfigDir)?
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME))
    }

    /// Load the saved config, or `None` if nothing has been saved yet.
    pub fn from_local_file() -> Result<Option<Self>, KartFinderError> {
        Self::from_file(&Self::default_path()?)
    }

    pub fn from_file(config_path: &Path) -> Result<Option<Self>, KartFinderError> {
        if !config_path.exists() {
            debug!("No config file at {:?}", config_path);
            return Ok(None);
        }

        let file = std::fs::File::open(config_path)
            .map_err(|e| KartFinderError::ConfigIOError { source: e })?;
        let config = serde_json::from_reader(file)
            .map_err(|e| KartFinderError::ConfigSerializeError { source: e })?;
        Ok(Some(config))
    }

    pub fn save(&self) -> Result<(), KartFinderError> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), KartFinderError> {
        if let Some(parent) = config_path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| KartFinderError::ConfigIOError { source: e })?;
        }

        let file = std::fs::File::create(config_path)
            .map_err(|e| KartFinderError::ConfigIOError { source: e })?;
        serde_json::to_writer(file, self)
            .map_err(|e| KartFinderError::ConfigSerializeError { source: e })?;
        debug!("Saved config to {:?}", config_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = AppConfig::from_file(&temp_dir.path().join("config.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let config = AppConfig { theme: Theme::Dark };
        config.save_to(&path).unwrap();

        let loaded = AppConfig::from_file(&path).unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        let loaded = AppConfig::from_file(&path).unwrap().unwrap();
        assert_eq!(loaded.theme, Theme::Light);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            AppConfig::from_file(&path),
            Err(KartFinderError::ConfigSerializeError { .. })
        ));
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
