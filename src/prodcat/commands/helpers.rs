use crate::error::{CatalogError, Result};
use crate::index::{index_products, DisplayProduct, ProductSelector};
use crate::store::product_store::ProductStore;
use crate::store::PersistenceAdapter;
use crate::view::ViewConfig;

pub fn displayed<A: PersistenceAdapter>(
    store: &ProductStore<A>,
    view: &ViewConfig,
) -> Vec<DisplayProduct> {
    index_products(store.products(), view)
}

/// Resolves each selector to one displayed-or-stored product.
///
/// Positions refer to the current displayed sequence. Keys match an identity
/// first, then a product code, across the whole collection so that filtered
/// out products stay addressable.
pub fn resolve_selectors<A: PersistenceAdapter>(
    store: &ProductStore<A>,
    view: &ViewConfig,
    selectors: &[ProductSelector],
) -> Result<Vec<DisplayProduct>> {
    let indexed = displayed(store, view);

    selectors
        .iter()
        .map(|selector| match selector {
            ProductSelector::Position(n) => indexed
                .iter()
                .find(|dp| dp.position == *n)
                .cloned()
                .ok_or_else(|| {
                    CatalogError::NotFound(format!(
                        "position {} ({} displayed)",
                        n,
                        indexed.len()
                    ))
                }),
            ProductSelector::Key(key) => {
                let product = store
                    .get(key)
                    .or_else(|| store.products().iter().find(|p| &p.product_code == key))
                    .ok_or_else(|| CatalogError::NotFound(selector.to_string()))?;
                // Position 0 marks a product hidden by the current view.
                let position = indexed
                    .iter()
                    .find(|dp| dp.product.id == product.id)
                    .map_or(0, |dp| dp.position);
                Ok(DisplayProduct {
                    position,
                    product: product.clone(),
                })
            }
        })
        .collect()
}
