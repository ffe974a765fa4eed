use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::index::ProductSelector;
use crate::model::{Price, ProductDraft};
use crate::store::product_store::ProductStore;
use crate::store::PersistenceAdapter;
use crate::view::ViewConfig;

use super::helpers::resolve_selectors;

/// Field changes for an edit. `None` leaves the current value alone.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub images: Option<Vec<String>>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub sizes: Option<Vec<String>>,
    pub bestseller: Option<bool>,
    pub product_code: Option<String>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.images.is_none()
            && self.category.is_none()
            && self.subcategory.is_none()
            && self.sizes.is_none()
            && self.bestseller.is_none()
            && self.product_code.is_none()
    }

    pub fn apply_to(self, mut draft: ProductDraft) -> ProductDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(price) = self.price {
            draft.price = price;
        }
        if let Some(images) = self.images {
            draft.images = images;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(subcategory) = self.subcategory {
            draft.subcategory = subcategory;
        }
        if let Some(sizes) = self.sizes {
            draft.sizes = sizes;
        }
        if let Some(bestseller) = self.bestseller {
            draft.bestseller = bestseller;
        }
        if let Some(code) = self.product_code {
            draft.product_code = code;
        }
        draft
    }
}

pub fn run<A: PersistenceAdapter>(
    store: &mut ProductStore<A>,
    view: &ViewConfig,
    selector: &ProductSelector,
    patch: ProductPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to change."));
        return Ok(result);
    }

    let target = resolve_selectors(store, view, std::slice::from_ref(selector))?
        .into_iter()
        .next()
        .ok_or_else(|| CatalogError::NotFound(selector.to_string()))?;

    let draft = patch.apply_to(target.product.to_draft());
    let updated = store
        .update(&target.product.id, draft)?
        .ok_or_else(|| CatalogError::NotFound(selector.to_string()))?;

    result.add_message(CmdMessage::success(format!(
        "Product updated ({}): {}",
        selector, updated.name
    )));
    Ok(result.with_affected_products(vec![updated]))
}
