use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::store::product_store::ProductStore;
use crate::store::PersistenceAdapter;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

/// Exports the whole collection, in canonical order, regardless of the view.
pub fn run<A: PersistenceAdapter>(
    store: &ProductStore<A>,
    target: ExportTarget,
) -> Result<CmdResult> {
    let text = store.serialize()?;
    let mut result = CmdResult::default();

    match target {
        ExportTarget::Stdout => {
            result.exported = Some(text);
        }
        ExportTarget::File(path) => {
            fs::write(&path, text).map_err(CatalogError::Io)?;
            result.add_message(CmdMessage::success(format!(
                "Exported {} products to {}",
                store.len(),
                path.display()
            )));
        }
    }

    Ok(result)
}
