use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ProductSelector;
use crate::store::product_store::ProductStore;
use crate::store::PersistenceAdapter;
use crate::view::ViewConfig;

use super::helpers::resolve_selectors;

/// Deletes every selected product. All selectors are resolved against the
/// same displayed sequence before anything is removed.
pub fn run<A: PersistenceAdapter>(
    store: &mut ProductStore<A>,
    view: &ViewConfig,
    selectors: &[ProductSelector],
) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, view, selectors)?;
    let mut result = CmdResult::default();

    for (selector, target) in selectors.iter().zip(resolved) {
        match store.delete(&target.product.id)? {
            Some(product) => {
                result.add_message(CmdMessage::success(format!(
                    "Product deleted ({}): {}",
                    selector, product.name
                )));
                result.affected_products.push(product);
            }
            // Same product selected twice.
            None => result.add_message(CmdMessage::warning(format!(
                "Already deleted ({}): {}",
                selector, target.product.name
            ))),
        }
    }

    Ok(result)
}
