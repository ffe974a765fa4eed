//! # Configuration
//!
//! Settings live in `config.json` inside the data directory. Missing keys
//! fall back to their defaults, so an empty or partial file is valid.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data-file` | `products.json` | File name of the saved collection |
//! | `export-file` | `products.json` | Default target of `prodcat export` |
//! | `placeholder-image` | a placeholder URL | Shown for products without images |
//! | `currency` | `$` | Prefix used when printing prices |
//!
//! ## CLI Usage
//!
//! - `prodcat config`: Show all configuration values.
//! - `prodcat config <key>`: Show one value.
//! - `prodcat config <key> <value>`: Set a value.

use crate::error::{CatalogError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";
const DEFAULT_CURRENCY: &str = "$";

pub const KEYS: [&str; 4] = ["data-file", "export-file", "placeholder-image", "currency"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct CatalogConfig {
    #[serde(default = "default_data_file")]
    pub data_file: String,

    #[serde(default = "default_data_file")]
    pub export_file: String,

    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            export_file: default_data_file(),
            placeholder_image: default_placeholder_image(),
            currency: default_currency(),
        }
    }
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: CatalogConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(config_path, content).map_err(CatalogError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "export-file" => Some(self.export_file.clone()),
            "placeholder-image" => Some(self.placeholder_image.clone()),
            "currency" => Some(self.currency.clone()),
            _ => None,
        }
    }

    /// Set a value by key. File names must be bare names, not paths.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "data-file" | "export-file" => {
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(format!("{} must be a plain file name", key));
                }
                if key == "data-file" {
                    self.data_file = value.to_string();
                } else {
                    self.export_file = value.to_string();
                }
            }
            "placeholder-image" => self.placeholder_image = value.to_string(),
            "currency" => self.currency = value.to_string(),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// All settings as key/value pairs, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.data_file, "products.json");
        assert_eq!(config.export_file, "products.json");
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn test_get_unknown_key() {
        assert_eq!(CatalogConfig::default().get("colour"), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut config = CatalogConfig::default();
        config.set("currency", " € ").unwrap();
        config.set("export-file", "backup.json").unwrap();
        assert_eq!(config.get("currency").as_deref(), Some("€"));
        assert_eq!(config.get("export-file").as_deref(), Some("backup.json"));
    }

    #[test]
    fn test_set_rejects_paths_for_file_keys() {
        let mut config = CatalogConfig::default();
        assert!(config.set("data-file", "../elsewhere.json").is_err());
        assert!(config.set("data-file", "").is_err());
        assert_eq!(config.data_file, "products.json");
    }

    #[test]
    fn test_set_unknown_key() {
        let mut config = CatalogConfig::default();
        assert!(config.set("colour", "red").is_err());
    }

    #[test]
    fn test_entries_cover_every_key() {
        let entries = CatalogConfig::default().entries();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, KEYS);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::load(dir.path()).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"currency": "£"}"#).unwrap();

        let config = CatalogConfig::load(dir.path()).unwrap();
        assert_eq!(config.currency, "£");
        assert_eq!(config.data_file, "products.json");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CatalogConfig::default();
        config.set("data-file", "shop.json").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = CatalogConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "shop.json");
        assert_eq!(loaded, config);
    }
}
