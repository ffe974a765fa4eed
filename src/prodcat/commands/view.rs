use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::ProductSelector;
use crate::store::product_store::ProductStore;
use crate::store::PersistenceAdapter;
use crate::view::ViewConfig;

use super::helpers::resolve_selectors;

pub fn run<A: PersistenceAdapter>(
    store: &ProductStore<A>,
    view: &ViewConfig,
    selectors: &[ProductSelector],
) -> Result<CmdResult> {
    let products = resolve_selectors(store, view, selectors)?;
    Ok(CmdResult::default().with_listed_products(products))
}
