use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::reorder::{self, ReorderController};
use crate::store::product_store::ProductStore;
use crate::store::PersistenceAdapter;
use crate::view::ViewConfig;

use super::helpers::displayed;

/// Moves the product shown at `from` to `to` (1-based displayed positions).
///
/// Replays the move as a drag gesture so the CLI goes through the same
/// controller an interactive client would.
pub fn run<A: PersistenceAdapter>(
    store: &mut ProductStore<A>,
    view: &ViewConfig,
    from: usize,
    to: usize,
) -> Result<CmdResult> {
    if from == 0 || to == 0 {
        return Err(CatalogError::Api("Positions start at 1".to_string()));
    }

    let mut controller = ReorderController::new();
    controller.start(from - 1);
    controller.over(to - 1);

    let mut result = CmdResult::default();
    let Some(mv) = controller.end() else {
        result.add_message(CmdMessage::info("Product is already at that position."));
        return Ok(result);
    };

    let moved = displayed(store, view)
        .into_iter()
        .find(|dp| dp.position == from)
        .map(|dp| dp.product);

    reorder::commit(store, view, mv)?;

    if let Some(product) = moved {
        result.add_message(CmdMessage::success(format!(
            "Moved {} from {} to {}",
            product.name, from, to
        )));
        result.affected_products.push(product);
    }
    Ok(result.with_listed_products(displayed(store, view)))
}
