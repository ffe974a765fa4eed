use super::PersistenceAdapter;
use crate::error::{CatalogError, Result};
use crate::model::Product;
use std::cell::{Cell, RefCell};

/// In-memory adapter for testing.
///
/// Uses `RefCell` for interior mutability since the catalog is single-threaded,
/// which lets `PersistenceAdapter` take `&self` everywhere.
#[derive(Default)]
pub struct MemAdapter {
    saved: RefCell<Option<Vec<Product>>>,
    save_count: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemAdapter {
    /// An adapter with nothing saved; `load` yields the seed collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// An adapter that already holds `products` as its saved collection.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            saved: RefCell::new(Some(products)),
            ..Default::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Snapshot of what was last written.
    pub fn saved(&self) -> Option<Vec<Product>> {
        self.saved.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl PersistenceAdapter for MemAdapter {
    fn read(&self) -> Result<Option<Vec<Product>>> {
        Ok(self.saved.borrow().clone())
    }

    fn write(&self, products: &[Product]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(CatalogError::Persistence(
                "Simulated write error".to_string(),
            ));
        }
        *self.saved.borrow_mut() = Some(products.to_vec());
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}
