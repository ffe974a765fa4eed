//! # Storage Layer
//!
//! Storage is split in two:
//!
//! 1. **Persistence**: the [`PersistenceAdapter`] trait moves the *whole*
//!    collection in and out of some durable medium. It knows nothing about
//!    products beyond their serialized shape.
//! 2. **Ownership**: [`product_store::ProductStore`] holds the canonical ordered
//!    collection in memory and is the only thing allowed to mutate it. Every
//!    mutation is committed back through the adapter.
//!
//! ## Save Semantics
//!
//! Saves are whole-collection replaces, never incremental. The in-memory
//! collection is updated first; the adapter catches up afterwards. If a save
//! fails, the store keeps the in-memory state as the source of truth for the
//! session and reports [`CatalogError::Persistence`](crate::error::CatalogError::Persistence)
//! to the caller.
//!
//! ## Implementations
//!
//! - [`fs::FileAdapter`]: Production adapter, a single JSON document on disk.
//! - [`memory::MemAdapter`]: In-memory adapter for tests, can simulate write failures.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── products.json    # The canonical collection, in order
//! ├── view.json        # Last view configuration (CLI only)
//! └── config.json      # Settings
//! ```

use crate::error::Result;
use crate::model::Product;
use crate::seed;

pub mod fs;
pub mod memory;
pub mod product_store;

/// Abstract interface for collection persistence.
///
/// Implementors provide raw `read`/`write`; `load` and `save` are what the
/// store calls.
pub trait PersistenceAdapter {
    /// Read the saved collection. Returns Ok(None) if nothing was ever saved.
    fn read(&self) -> Result<Option<Vec<Product>>>;

    /// Overwrite the saved collection.
    fn write(&self, products: &[Product]) -> Result<()>;

    /// The saved collection, or the seed collection if none exists.
    fn load(&self) -> Result<Vec<Product>> {
        Ok(self.read()?.unwrap_or_else(seed::default_products))
    }

    fn save(&self, products: &[Product]) -> Result<()> {
        self.write(products)
    }
}
