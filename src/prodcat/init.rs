//! # Initialization
//!
//! Wires a [`CatalogApi`] for a data directory: resolves the directory, loads
//! `config.json`, opens the product file named there, and restores the last
//! saved view.
//!
//! ## Data Directory Resolution
//!
//! 1. An explicit override (the CLI's `--data-dir`).
//! 2. The `PRODCAT_DATA` environment variable.
//! 3. The OS-appropriate data directory via the `directories` crate.

use crate::api::{CatalogApi, CatalogPaths};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::store::fs::FileAdapter;
use crate::view::ViewConfig;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "PRODCAT_DATA";

pub struct CatalogContext {
    pub api: CatalogApi<FileAdapter>,
    pub config: CatalogConfig,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "prodcat", "prodcat")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CatalogError::Api("Could not determine data directory".to_string()))
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<CatalogContext> {
    let data_dir = resolve_data_dir(data_override)?;
    tracing::debug!(path = %data_dir.display(), "using data directory");

    let config = CatalogConfig::load(&data_dir)?;
    // A broken view file only costs the user their last sort/filter.
    let view = ViewConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable view state");
        ViewConfig::default()
    });

    let adapter = FileAdapter::new(data_dir.clone()).with_file_name(&config.data_file);
    let api = CatalogApi::open(adapter, CatalogPaths::new(data_dir), view)?;

    Ok(CatalogContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let dir = resolve_data_dir(Some(PathBuf::from("/tmp/catalog"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/catalog"));
    }

    #[test]
    fn initialize_uses_configured_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CatalogConfig::default();
        config.set("data-file", "shop.json").unwrap();
        config.save(dir.path()).unwrap();

        let ctx = initialize(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(ctx.config.data_file, "shop.json");
        assert_eq!(
            ctx.api.store().adapter().data_path(),
            dir.path().join("shop.json")
        );
        // Nothing saved yet, so the seed collection is shown.
        assert_eq!(ctx.api.store().len(), 1);
    }

    #[test]
    fn initialize_restores_saved_view() {
        let dir = tempfile::tempdir().unwrap();
        let view = ViewConfig {
            manual_order: true,
            ..Default::default()
        };
        view.save(dir.path()).unwrap();

        let ctx = initialize(Some(dir.path().to_path_buf())).unwrap();
        assert!(ctx.api.view().manual_order);
    }

    #[test]
    fn initialize_ignores_corrupt_view() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("view.json"), "{{").unwrap();

        let ctx = initialize(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(ctx.api.view(), &ViewConfig::default());
    }
}
