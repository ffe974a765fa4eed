//! # Display Positions and Selectors
//!
//! Users refer to products by their **position** in the displayed sequence
//! (1-based, as printed by `prodcat list`), or by a stable key.
//!
//! Positions are only meaningful relative to one [`ViewConfig`]: changing the
//! sort or a filter renumbers everything. Identities and product codes never
//! change, which makes them the right choice for scripts.
//!
//! ## Selector Syntax
//!
//! - `3`: the third displayed product.
//! - `2-4`: displayed products 2, 3 and 4.
//! - anything else: an exact identity, or failing that an exact product code.

use crate::model::Product;
use crate::view::{self, ViewConfig};
use std::fmt;
use std::str::FromStr;

/// A product together with its 1-based position in the displayed sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayProduct {
    pub position: usize,
    pub product: Product,
}

/// User input that picks one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductSelector {
    Position(usize),
    Key(String),
}

impl fmt::Display for ProductSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductSelector::Position(n) => write!(f, "{}", n),
            ProductSelector::Key(k) => write!(f, "\"{}\"", k),
        }
    }
}

impl FromStr for ProductSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty selector".to_string());
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            return match s.parse::<usize>() {
                Ok(0) => Err("Positions start at 1".to_string()),
                Ok(n) => Ok(ProductSelector::Position(n)),
                Err(_) => Err(format!("Invalid position: {}", s)),
            };
        }
        Ok(ProductSelector::Key(s.to_string()))
    }
}

/// Numbers the displayed sequence for `config`, starting at 1.
pub fn index_products(products: &[Product], config: &ViewConfig) -> Vec<DisplayProduct> {
    view::derive(products, config)
        .into_iter()
        .enumerate()
        .map(|(i, product)| DisplayProduct {
            position: i + 1,
            product: product.clone(),
        })
        .collect()
}

/// Expands one input into selectors. `a-b` ranges expand to every position in
/// between and may not reach past `displayed`, the length of the listing.
pub fn parse_selector_input(
    input: &str,
    displayed: usize,
) -> Result<Vec<ProductSelector>, String> {
    if let Some((start, end)) = input.split_once('-') {
        if let (Ok(start), Ok(end)) = (start.trim().parse::<usize>(), end.trim().parse::<usize>()) {
            if start == 0 || end == 0 {
                return Err("Positions start at 1".to_string());
            }
            if start > end {
                return Err(format!("Invalid range {}-{}: start is after end", start, end));
            }
            if end > displayed {
                return Err(format!(
                    "Invalid range {}-{}: only {} displayed",
                    start, end, displayed
                ));
            }
            return Ok((start..=end).map(ProductSelector::Position).collect());
        }
    }
    Ok(vec![input.parse()?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Price, ProductDraft};

    #[test]
    fn test_parse_position() {
        assert_eq!("3".parse(), Ok(ProductSelector::Position(3)));
        assert!("0".parse::<ProductSelector>().is_err());
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(
            "SAMPLE-001".parse(),
            Ok(ProductSelector::Key("SAMPLE-001".into()))
        );
        assert_eq!("3a".parse(), Ok(ProductSelector::Key("3a".into())));
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            parse_selector_input("2-4", 4).unwrap(),
            vec![
                ProductSelector::Position(2),
                ProductSelector::Position(3),
                ProductSelector::Position(4)
            ]
        );
        assert!(parse_selector_input("4-2", 4).is_err());
    }

    #[test]
    fn test_range_past_listing_is_rejected() {
        assert!(parse_selector_input("1-99999999999", 3).is_err());
        assert!(parse_selector_input("2-4", 3).is_err());
        assert_eq!(parse_selector_input("3-3", 3).unwrap().len(), 1);
    }

    #[test]
    fn test_codes_with_dashes_are_keys() {
        assert_eq!(
            parse_selector_input("SKU-12", 0).unwrap(),
            vec![ProductSelector::Key("SKU-12".into())]
        );
    }

    #[test]
    fn test_index_products_numbers_displayed_sequence() {
        let products: Vec<Product> = ["A", "B", "C"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Product::from_draft(i.to_string(), i as i64, ProductDraft::new(*name, Price::ZERO))
            })
            .collect();

        // Default view is newest first.
        let indexed = index_products(&products, &ViewConfig::default());
        let labels: Vec<(usize, &str)> = indexed
            .iter()
            .map(|dp| (dp.position, dp.product.name.as_str()))
            .collect();
        assert_eq!(labels, vec![(1, "C"), (2, "B"), (3, "A")]);
    }
}
