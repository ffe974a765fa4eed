use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::product_store::ProductStore;
use crate::store::PersistenceAdapter;
use crate::view;

pub fn run<A: PersistenceAdapter>(store: &ProductStore<A>) -> Result<CmdResult> {
    let categories = view::categories(store.products());
    let mut result = CmdResult::default();
    if categories.is_empty() {
        result.add_message(CmdMessage::info("No categories yet."));
    }
    Ok(result.with_categories(categories))
}
