use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProductDraft;
use crate::store::product_store::ProductStore;
use crate::store::PersistenceAdapter;

pub fn run<A: PersistenceAdapter>(
    store: &mut ProductStore<A>,
    draft: ProductDraft,
) -> Result<CmdResult> {
    let product = store.create(draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product created: {}",
        product.name
    )));
    Ok(result.with_affected_products(vec![product]))
}
