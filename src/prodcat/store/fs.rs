use super::PersistenceAdapter;
use crate::error::{CatalogError, Result};
use crate::model::Product;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "products.json";

/// Stores the collection as one pretty-printed JSON array.
pub struct FileAdapter {
    root: PathBuf,
    file_name: String,
}

impl FileAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| {
                CatalogError::Persistence(format!(
                    "failed to create {}: {}",
                    self.root.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

impl PersistenceAdapter for FileAdapter {
    fn read(&self) -> Result<Option<Vec<Product>>> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|e| {
            CatalogError::Persistence(format!("failed to read {}: {}", path.display(), e))
        })?;
        let products: Vec<Product> = serde_json::from_str(&content).map_err(|e| {
            CatalogError::Persistence(format!("failed to parse {}: {}", path.display(), e))
        })?;
        tracing::debug!(count = products.len(), path = %path.display(), "loaded collection");
        Ok(Some(products))
    }

    fn write(&self, products: &[Product]) -> Result<()> {
        self.ensure_dir()?;

        let path = self.data_path();
        let content = serde_json::to_string_pretty(products)?;

        // Atomic write
        let tmp_path = self.root.join(format!(".products-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content)
            .and_then(|_| fs::rename(&tmp_path, &path))
            .map_err(|e| {
                let _ = fs::remove_file(&tmp_path);
                CatalogError::Persistence(format!("failed to write {}: {}", path.display(), e))
            })?;

        tracing::debug!(count = products.len(), path = %path.display(), "saved collection");
        Ok(())
    }
}
