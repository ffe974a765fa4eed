//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for catalog operations, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (selector strings into [`ProductSelector`]s)
//! - **Holds the session view**: the [`ViewConfig`] that positions refer to
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no terminal I/O and no formatting. Persisting the view between
//! sessions is up to the client.
//!
//! ## Generic Over PersistenceAdapter
//!
//! `CatalogApi<A: PersistenceAdapter>`:
//! - Production: `CatalogApi<FileAdapter>`
//! - Testing: `CatalogApi<MemAdapter>`

use crate::commands;
use crate::error::{CatalogError, Result};
use crate::index::{parse_selector_input, ProductSelector};
use crate::model::ProductDraft;
use crate::store::product_store::{ImportMode, ProductStore};
use crate::store::PersistenceAdapter;
use crate::view::{self, SortKey, ViewConfig};
use std::path::Path;

pub struct CatalogApi<A: PersistenceAdapter> {
    store: ProductStore<A>,
    paths: commands::CatalogPaths,
    view: ViewConfig,
}

impl<A: PersistenceAdapter> CatalogApi<A> {
    /// Opens the store through `adapter`.
    pub fn open(adapter: A, paths: commands::CatalogPaths, view: ViewConfig) -> Result<Self> {
        let store = ProductStore::open(adapter)?;
        Ok(Self { store, paths, view })
    }

    pub fn create_product(&mut self, draft: ProductDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.view)
    }

    pub fn view_products<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = self.parse_selectors(selectors)?;
        commands::view::run(&self.store, &self.view, &selectors)
    }

    pub fn update_product(
        &mut self,
        selector: &str,
        patch: ProductPatch,
    ) -> Result<commands::CmdResult> {
        let selector = parse_single(selector)?;
        commands::update::run(&mut self.store, &self.view, &selector, patch)
    }

    pub fn delete_products<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = self.parse_selectors(selectors)?;
        commands::delete::run(&mut self.store, &self.view, &selectors)
    }

    pub fn move_product(&mut self, from: usize, to: usize) -> Result<commands::CmdResult> {
        commands::reorder::run(&mut self.store, &self.view, from, to)
    }

    pub fn sort_by(&mut self, key: SortKey) -> commands::CmdResult {
        commands::view_state::sort(&mut self.view, key)
    }

    pub fn toggle_manual_order(&mut self) -> commands::CmdResult {
        commands::view_state::toggle_manual(&mut self.view)
    }

    pub fn set_filters(&mut self, filter: ViewFilter) -> commands::CmdResult {
        commands::view_state::filter(&mut self.view, filter)
    }

    pub fn reset_view(&mut self) -> commands::CmdResult {
        commands::view_state::reset(&mut self.view)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::categories::run(&self.store)
    }

    pub fn export_products(&self, target: ExportTarget) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, target)
    }

    pub fn import_products(&mut self, path: &Path, mode: ImportMode) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path, mode)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    pub fn paths(&self) -> &commands::CatalogPaths {
        &self.paths
    }

    pub fn store(&self) -> &ProductStore<A> {
        &self.store
    }

    fn parse_selectors<I: AsRef<str>>(&self, inputs: &[I]) -> Result<Vec<ProductSelector>> {
        if inputs.is_empty() {
            return Err(CatalogError::Api("No products selected".to_string()));
        }
        let displayed = view::derive(self.store.products(), &self.view).len();
        let mut selectors = Vec::with_capacity(inputs.len());
        for input in inputs {
            selectors.extend(
                parse_selector_input(input.as_ref(), displayed).map_err(CatalogError::Api)?,
            );
        }
        Ok(selectors)
    }
}

fn parse_single(input: &str) -> Result<ProductSelector> {
    input.parse().map_err(CatalogError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::ExportTarget;
pub use crate::commands::update::ProductPatch;
pub use crate::commands::view_state::ViewFilter;
pub use crate::commands::{CatalogPaths, CmdMessage, CmdResult, MessageLevel};
