use super::PersistenceAdapter;
use crate::error::{CatalogError, Result};
use crate::model::{now_millis, Product, ProductDraft};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// How `import` combines a parsed collection with the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Add records whose identity is not already present, at the end.
    Append,
    /// Install the parsed collection as the canonical one.
    Replace,
}

/// Owner of the canonical ordered product collection.
pub struct ProductStore<A: PersistenceAdapter> {
    adapter: A,
    products: Vec<Product>,
}

impl<A: PersistenceAdapter> ProductStore<A> {
    /// Loads the collection through the adapter.
    pub fn open(adapter: A) -> Result<Self> {
        let loaded = adapter.load()?;
        let products = dedupe_identities(loaded);
        tracing::debug!(count = products.len(), "opened product store");
        Ok(Self { adapter, products })
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// The canonical collection, in stored order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    pub fn create(&mut self, draft: ProductDraft) -> Result<Product> {
        let draft = draft.normalized()?;
        let product = Product::from_draft(
            Uuid::new_v4().to_string(),
            self.next_timestamp(),
            draft,
        );
        self.products.push(product.clone());
        tracing::debug!(id = %product.id, name = %product.name, "created product");

        self.commit()?;
        Ok(product)
    }

    /// Replaces every mutable field of `id`. Returns Ok(None) if there is no such product.
    pub fn update(&mut self, id: &str, draft: ProductDraft) -> Result<Option<Product>> {
        let Some(pos) = self.position(id) else {
            tracing::debug!(id, "update skipped, product not found");
            return Ok(None);
        };
        let draft = draft.normalized()?;

        self.products[pos].apply(draft);
        let updated = self.products[pos].clone();
        tracing::debug!(id, "updated product");

        self.commit()?;
        Ok(Some(updated))
    }

    /// Removes `id`. Returns Ok(None) if there is no such product.
    pub fn delete(&mut self, id: &str) -> Result<Option<Product>> {
        let Some(pos) = self.position(id) else {
            tracing::debug!(id, "delete skipped, product not found");
            return Ok(None);
        };

        let removed = self.products.remove(pos);
        tracing::debug!(id, "deleted product");

        self.commit()?;
        Ok(Some(removed))
    }

    /// Installs a new canonical order.
    ///
    /// `ids` must be a permutation of the current identities: no additions,
    /// omissions, or repeats. Anything else is rejected before the collection
    /// is touched.
    pub fn replace_order<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<()> {
        if ids.len() != self.products.len() {
            return Err(CatalogError::InvalidOrder(format!(
                "expected {} identities, got {}",
                self.products.len(),
                ids.len()
            )));
        }

        let mut remaining: HashMap<&str, usize> = self
            .products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.as_str(), i))
            .collect();

        let mut order = Vec::with_capacity(ids.len());
        for id in ids {
            let id = id.as_ref();
            match remaining.remove(id) {
                Some(pos) => order.push(pos),
                None if self.get(id).is_some() => {
                    return Err(CatalogError::InvalidOrder(format!(
                        "identity {} appears more than once",
                        id
                    )));
                }
                None => {
                    return Err(CatalogError::InvalidOrder(format!(
                        "identity {} is not in the collection",
                        id
                    )));
                }
            }
        }
        drop(remaining);

        let mut slots: Vec<Option<Product>> = std::mem::take(&mut self.products)
            .into_iter()
            .map(Some)
            .collect();
        self.products = order.into_iter().filter_map(|i| slots[i].take()).collect();
        tracing::debug!(count = self.products.len(), "installed new order");

        self.commit()
    }

    /// Pretty-printed JSON of the collection in canonical order.
    pub fn serialize(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.products)?)
    }

    /// Merges a serialized collection into the store. Returns how many records were added.
    pub fn import(&mut self, text: &str, mode: ImportMode) -> Result<usize> {
        let parsed = parse_collection(text)?;

        let added = match mode {
            ImportMode::Replace => {
                self.products = dedupe_identities(parsed);
                self.products.len()
            }
            ImportMode::Append => {
                let mut known: HashSet<String> =
                    self.products.iter().map(|p| p.id.clone()).collect();
                let before = self.products.len();
                for product in parsed {
                    if known.insert(product.id.clone()) {
                        self.products.push(product);
                    }
                }
                self.products.len() - before
            }
        };
        tracing::debug!(added, ?mode, "imported products");

        self.commit()?;
        Ok(added)
    }

    fn commit(&self) -> Result<()> {
        self.adapter.save(&self.products).map_err(|e| {
            tracing::warn!(error = %e, "save failed, in-memory collection kept");
            match e {
                CatalogError::Persistence(_) => e,
                other => CatalogError::Persistence(other.to_string()),
            }
        })
    }

    // Creation times stay strictly increasing even when two creates land in
    // the same millisecond, saturating at the largest representable date.
    fn next_timestamp(&self) -> i64 {
        let now = now_millis();
        match self.products.iter().map(|p| p.created_at).max() {
            Some(latest) if latest >= now => latest.saturating_add(1),
            _ => now,
        }
    }
}

/// Parses text produced by [`ProductStore::serialize`].
pub fn parse_collection(text: &str) -> Result<Vec<Product>> {
    Ok(serde_json::from_str(text)?)
}

fn dedupe_identities(products: Vec<Product>) -> Vec<Product> {
    let mut seen = HashSet::new();
    products
        .into_iter()
        .filter(|p| {
            let fresh = seen.insert(p.id.clone());
            if !fresh {
                tracing::warn!(id = %p.id, "dropping product with duplicate identity");
            }
            fresh
        })
        .collect()
}
