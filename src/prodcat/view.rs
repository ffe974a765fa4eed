//! # View State
//!
//! Derives the *displayed sequence*, the ordered subset of the catalog shown
//! to the user, from the canonical collection and a [`ViewConfig`].
//!
//! ## Pipeline
//!
//! 1. **Filter**: every active filter must match (AND logic).
//!    - Search: case-insensitive substring of name, description or product code.
//!    - Category: exact match. Empty means no filter.
//!    - Bestseller: `None` means no filter, `Some(b)` keeps only matching flags.
//! 2. **Order**:
//!    - Manual order: the filtered products in canonical stored order. Sort
//!      settings are ignored entirely.
//!    - Otherwise: sorted by the selected key. Descending is the exact reverse
//!      of ascending, so flipping direction always mirrors the list.
//!
//! ## Sort Toggling
//!
//! Clicking a sort key behaves like a column header:
//! - Same key again: direction flips.
//! - Different key: that key, ascending.
//! - Either way, manual order is switched off.
//!
//! The derived list borrows from the collection. It is never written back
//! directly; reordering goes through [`crate::reorder`] and the store.

use crate::error::{CatalogError, Result};
use crate::model::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const VIEW_FILENAME: &str = "view.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Price,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub search: String,
    pub category: String,
    pub bestseller: Option<bool>,
    pub sort_key: SortKey,
    pub direction: SortDirection,
    pub manual_order: bool,
}

// Newest first, like the catalog's landing list.
impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            bestseller: None,
            sort_key: SortKey::Date,
            direction: SortDirection::Desc,
            manual_order: false,
        }
    }
}

impl ViewConfig {
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.direction = self.direction.flipped();
        } else {
            self.sort_key = key;
            self.direction = SortDirection::Asc;
        }
        self.manual_order = false;
    }

    pub fn toggle_manual_order(&mut self) {
        self.manual_order = !self.manual_order;
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty() || !self.category.is_empty() || self.bestseller.is_some()
    }

    /// Drops every filter, keeping sort and manual-order settings.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.category.clear();
        self.bestseller = None;
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_term(product, &self.search.to_lowercase())
    }

    fn matches_term(&self, product: &Product, term_lower: &str) -> bool {
        let matches_search = term_lower.is_empty()
            || product.name.to_lowercase().contains(term_lower)
            || product.description.to_lowercase().contains(term_lower)
            || product.product_code.to_lowercase().contains(term_lower);

        let matches_category = self.category.is_empty() || product.category == self.category;

        let matches_bestseller = self.bestseller.map_or(true, |b| product.bestseller == b);

        matches_search && matches_category && matches_bestseller
    }

    /// Load the view from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(VIEW_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(CatalogError::Io)?;
        let view: ViewConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(view)
    }

    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(CatalogError::Io)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(dir.join(VIEW_FILENAME), content).map_err(CatalogError::Io)?;
        Ok(())
    }
}

/// Computes the displayed sequence for `config`.
pub fn derive<'a>(products: &'a [Product], config: &ViewConfig) -> Vec<&'a Product> {
    let term_lower = config.search.to_lowercase();
    let mut visible: Vec<&Product> = products
        .iter()
        .filter(|p| config.matches_term(p, &term_lower))
        .collect();

    if config.manual_order {
        return visible;
    }

    visible.sort_by(|a, b| compare(config.sort_key, a, b));
    if config.direction == SortDirection::Desc {
        visible.reverse();
    }
    visible
}

/// Distinct non-empty categories in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| !p.category.is_empty() && seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect()
}

fn compare(key: SortKey, a: &Product, b: &Product) -> Ordering {
    match key {
        SortKey::Name => collate(&a.name, &b.name),
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Date => a.created_at.cmp(&b.created_at),
    }
}

// Case-folded comparison first; on case-only ties lowercase sorts first.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Price, ProductDraft};

    fn product(name: &str, price: &str, date: i64) -> Product {
        Product::from_draft(
            format!("id-{}", name),
            date,
            ProductDraft::new(name, price.parse::<Price>().unwrap()),
        )
    }

    fn names(list: &[&Product]) -> Vec<String> {
        list.iter().map(|p| p.name.clone()).collect()
    }

    fn sorted(key: SortKey, direction: SortDirection) -> ViewConfig {
        ViewConfig {
            sort_key: key,
            direction,
            ..Default::default()
        }
    }

    fn two_products() -> Vec<Product> {
        vec![product("A", "10", 100), product("B", "5", 200)]
    }

    #[test]
    fn test_sort_by_price_both_directions() {
        let products = two_products();
        let asc = derive(&products, &sorted(SortKey::Price, SortDirection::Asc));
        let desc = derive(&products, &sorted(SortKey::Price, SortDirection::Desc));
        assert_eq!(names(&asc), vec!["B", "A"]);
        assert_eq!(names(&desc), vec!["A", "B"]);
    }

    #[test]
    fn test_sort_by_date_ascending() {
        let products = two_products();
        let asc = derive(&products, &sorted(SortKey::Date, SortDirection::Asc));
        assert_eq!(names(&asc), vec!["A", "B"]);
    }

    #[test]
    fn test_default_view_is_newest_first() {
        let products = two_products();
        let list = derive(&products, &ViewConfig::default());
        assert_eq!(names(&list), vec!["B", "A"]);
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let products = vec![
            product("banana", "1", 1),
            product("Apple", "1", 2),
            product("cherry", "1", 3),
        ];
        let list = derive(&products, &sorted(SortKey::Name, SortDirection::Asc));
        assert_eq!(names(&list), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_descending_is_exact_reverse_even_with_ties() {
        let products = vec![
            product("A", "5", 1),
            product("B", "5", 2),
            product("C", "1", 3),
            product("D", "5", 4),
        ];
        for key in [SortKey::Name, SortKey::Price, SortKey::Date] {
            let asc = names(&derive(&products, &sorted(key, SortDirection::Asc)));
            let mut desc = names(&derive(&products, &sorted(key, SortDirection::Desc)));
            desc.reverse();
            assert_eq!(asc, desc, "key {:?}", key);
        }
    }

    #[test]
    fn test_bestseller_filter_ignores_sort() {
        let mut products = two_products();
        products[1].bestseller = true;
        for key in [SortKey::Name, SortKey::Price, SortKey::Date] {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let config = ViewConfig {
                    bestseller: Some(true),
                    ..sorted(key, direction)
                };
                assert_eq!(names(&derive(&products, &config)), vec!["B"]);
            }
        }
    }

    #[test]
    fn test_non_bestseller_filter() {
        let mut products = two_products();
        products[1].bestseller = true;
        let config = ViewConfig {
            bestseller: Some(false),
            ..Default::default()
        };
        assert_eq!(names(&derive(&products, &config)), vec!["A"]);
    }

    #[test]
    fn test_search_matches_name_description_and_code() {
        let mut products = vec![
            product("Linen Shirt", "1", 1),
            product("Hat", "1", 2),
            product("Scarf", "1", 3),
            product("Boots", "1", 4),
        ];
        products[1].description = "Great with a SHIRT".into();
        products[2].product_code = "shirt-99".into();

        let config = ViewConfig {
            search: "Shirt".into(),
            manual_order: true,
            ..Default::default()
        };
        assert_eq!(
            names(&derive(&products, &config)),
            vec!["Linen Shirt", "Hat", "Scarf"]
        );
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let mut products = vec![
            product("Red Hat", "1", 1),
            product("Red Shoe", "1", 2),
            product("Blue Hat", "1", 3),
        ];
        products[0].category = "hats".into();
        products[1].category = "shoes".into();
        products[2].category = "hats".into();
        products[0].bestseller = true;
        products[2].bestseller = true;

        let config = ViewConfig {
            search: "red".into(),
            category: "hats".into(),
            bestseller: Some(true),
            ..Default::default()
        };
        assert_eq!(names(&derive(&products, &config)), vec!["Red Hat"]);
    }

    #[test]
    fn test_category_filter_never_matches_missing_category() {
        let products = two_products();
        let config = ViewConfig {
            category: "hats".into(),
            ..Default::default()
        };
        assert!(derive(&products, &config).is_empty());
    }

    #[test]
    fn test_output_is_exactly_the_matching_subset() {
        let mut products = vec![
            product("A", "1", 1),
            product("B", "2", 2),
            product("C", "3", 3),
        ];
        products[0].category = "x".into();
        products[2].category = "x".into();
        let config = ViewConfig {
            category: "x".into(),
            ..sorted(SortKey::Price, SortDirection::Desc)
        };

        let out: HashSet<&str> = derive(&products, &config)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        let expected: HashSet<&str> = products
            .iter()
            .filter(|p| config.matches(p))
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(out, expected);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_empty_inputs_yield_empty_output() {
        assert!(derive(&[], &ViewConfig::default()).is_empty());
        let products = two_products();
        let config = ViewConfig {
            search: "zzz".into(),
            ..Default::default()
        };
        assert!(derive(&products, &config).is_empty());
    }

    #[test]
    fn test_manual_order_keeps_stored_order() {
        let products = vec![
            product("C", "3", 3),
            product("A", "1", 1),
            product("B", "2", 2),
        ];
        let config = ViewConfig {
            manual_order: true,
            ..sorted(SortKey::Name, SortDirection::Asc)
        };
        assert_eq!(names(&derive(&products, &config)), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_toggle_sort_same_key_flips_direction() {
        let mut config = sorted(SortKey::Price, SortDirection::Asc);
        config.manual_order = true;
        config.toggle_sort(SortKey::Price);
        assert_eq!(config.direction, SortDirection::Desc);
        assert!(!config.manual_order);
        config.toggle_sort(SortKey::Price);
        assert_eq!(config.direction, SortDirection::Asc);
    }

    #[test]
    fn test_toggle_sort_new_key_resets_to_ascending() {
        let mut config = sorted(SortKey::Date, SortDirection::Desc);
        config.manual_order = true;
        config.toggle_sort(SortKey::Name);
        assert_eq!(config.sort_key, SortKey::Name);
        assert_eq!(config.direction, SortDirection::Asc);
        assert!(!config.manual_order);
    }

    #[test]
    fn test_has_active_filters() {
        let mut config = ViewConfig::default();
        assert!(!config.has_active_filters());
        config.bestseller = Some(false);
        assert!(config.has_active_filters());
        config.clear_filters();
        assert!(!config.has_active_filters());
    }

    #[test]
    fn test_categories_distinct_in_first_seen_order() {
        let mut products = vec![
            product("A", "1", 1),
            product("B", "1", 2),
            product("C", "1", 3),
            product("D", "1", 4),
        ];
        products[0].category = "shoes".into();
        products[1].category = "hats".into();
        products[2].category = "shoes".into();

        assert_eq!(categories(&products), vec!["shoes", "hats"]);
    }

    #[test]
    fn test_view_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ViewConfig::default();
        config.toggle_sort(SortKey::Price);
        config.category = "hats".into();
        config.save(dir.path()).unwrap();

        let loaded = ViewConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_view_load_missing_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(ViewConfig::load(dir.path()).unwrap(), ViewConfig::default());
    }
}
