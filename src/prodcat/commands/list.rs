use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::product_store::ProductStore;
use crate::store::PersistenceAdapter;
use crate::view::ViewConfig;

use super::helpers::displayed;

pub fn run<A: PersistenceAdapter>(store: &ProductStore<A>, view: &ViewConfig) -> Result<CmdResult> {
    let listed = displayed(store, view);

    let mut result = CmdResult::default();
    if listed.is_empty() {
        if store.is_empty() {
            result.add_message(CmdMessage::info("No products yet."));
        } else if view.has_active_filters() {
            result.add_message(CmdMessage::info(format!(
                "No products match the current filters ({} hidden).",
                store.len()
            )));
        }
    }

    Ok(result.with_listed_products(listed).with_view(view.clone()))
}
