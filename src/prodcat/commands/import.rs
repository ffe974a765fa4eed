use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::store::product_store::{ImportMode, ProductStore};
use crate::store::PersistenceAdapter;
use std::fs;
use std::path::Path;

pub fn run<A: PersistenceAdapter>(
    store: &mut ProductStore<A>,
    path: &Path,
    mode: ImportMode,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !path.is_file() {
        result.add_message(CmdMessage::warning(format!(
            "File not found: {}",
            path.display()
        )));
        return Ok(result);
    }

    let text = fs::read_to_string(path).map_err(CatalogError::Io)?;
    let before = store.len();
    let added = store.import(&text, mode)?;

    match mode {
        ImportMode::Append => {
            result.add_message(CmdMessage::success(format!(
                "Imported {} products from {}",
                added,
                path.display()
            )));
        }
        ImportMode::Replace => {
            result.add_message(CmdMessage::success(format!(
                "Replaced {} products with {} from {}",
                before,
                added,
                path.display()
            )));
        }
    }
    Ok(result)
}
