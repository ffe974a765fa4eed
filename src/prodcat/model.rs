//! # Domain Model: Product Records
//!
//! This module defines the core data structures for prodcat: [`Product`], the
//! editable [`ProductDraft`], and the [`Price`] newtype.
//!
//! ## Record Format
//!
//! Products are stored as JSON objects whose field names mirror the catalog's
//! historical local-storage format, so a file exported by any earlier version
//! loads unchanged:
//!
//! ```text
//! {
//!   "_id": "6f1c…",           identity, immutable
//!   "name": "Linen Shirt",
//!   "description": "…",
//!   "price": 29.99,            number on write, number or text on read
//!   "image": ["https://…"],    first entry is the primary image
//!   "category": "Men",
//!   "subcategory": "Topwear",  legacy "subCategory" accepted on read
//!   "sizes": ["S", "M"],       set semantics, duplicates dropped on read
//!   "bestseller": true,
//!   "date": 1716200000000,     creation time, ms since epoch, immutable
//!   "productid": "LS-001"      external code, not required unique
//! }
//! ```
//!
//! ## Normalization
//!
//! Drafts are normalized before they reach the store:
//!
//! 1. Name, product code, category and subcategory are trimmed.
//! 2. Image references are trimmed; empty ones are dropped.
//! 3. Sizes are trimmed, empty ones dropped, duplicates removed (first wins).
//!
//! A draft with an empty name is rejected. Prices can never be negative.

use rust_decimal::prelude::*;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, Result};

const PRICE_DECIMAL_PLACES: u32 = 2;

/// Prices are written as JSON numbers (binary doubles); 15 significant digits
/// is the most a double carries through a write and read unchanged.
const PRICE_SIGNIFICANT_DIGITS: usize = 15;

/// A non-negative decimal price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Result<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(CatalogError::InvalidInput(format!(
                "price must be non-negative, got {}",
                amount
            )));
        }
        let amount = amount.normalize();
        if significant_digits(amount) > PRICE_SIGNIFICANT_DIGITS {
            return Err(CatalogError::InvalidInput(format!(
                "price has more than {} significant digits: {}",
                PRICE_SIGNIFICANT_DIGITS, amount
            )));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Two-decimal rendering used by listings ("29.90", "5.00").
    pub fn formatted(&self) -> String {
        let mut rounded = self
            .0
            .round_dp_with_strategy(PRICE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(PRICE_DECIMAL_PLACES);
        rounded.to_string()
    }
}

impl FromStr for Price {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if text.is_empty() {
            return Ok(Price::ZERO);
        }
        let amount = Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|_| CatalogError::InvalidInput(format!("invalid price: {}", s)))?;
        Price::new(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let number = serde_json::Number::from_str(&self.0.to_string()).map_err(S::Error::custom)?;
        number.serialize(serializer)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Number(serde_json::Number),
    Text(String),
}

// Stored numbers may carry float noise from earlier writers
// (0.30000000000000004); they are rounded to what a double holds exactly.
// Text keeps the strict parse.
impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match PriceRepr::deserialize(deserializer)? {
            PriceRepr::Number(n) => {
                let text = n.to_string();
                let amount = Decimal::from_str(&text)
                    .or_else(|_| Decimal::from_scientific(&text))
                    .map_err(|_| D::Error::custom(format!("invalid price: {}", text)))?;
                let rounded = amount
                    .round_sf(PRICE_SIGNIFICANT_DIGITS as u32)
                    .ok_or_else(|| D::Error::custom(format!("invalid price: {}", text)))?;
                Price::new(rounded).map_err(D::Error::custom)
            }
            PriceRepr::Text(t) => Price::from_str(&t).map_err(D::Error::custom),
        }
    }
}

fn significant_digits(amount: Decimal) -> usize {
    amount
        .mantissa()
        .unsigned_abs()
        .to_string()
        .trim_end_matches('0')
        .len()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Price,
    #[serde(rename = "image")]
    pub images: Vec<String>,
    pub category: String,
    pub subcategory: String,
    pub sizes: Vec<String>,
    pub bestseller: bool,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(rename = "date")]
    pub created_at: i64,
    #[serde(rename = "productid")]
    pub product_code: String,
}

// Older exports used `subCategory` and may carry duplicated sizes; both are
// repaired on the way in.
impl<'de> Deserialize<'de> for Product {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = ProductHelper::deserialize(deserializer)?;

        Ok(Product {
            id: helper.id,
            name: helper.name,
            description: helper.description,
            price: helper.price,
            images: helper.images,
            category: helper.category,
            subcategory: helper.subcategory,
            sizes: dedupe_sizes(helper.sizes),
            bestseller: helper.bestseller,
            created_at: helper.created_at,
            product_code: helper.product_code,
        })
    }
}

#[derive(Deserialize)]
struct ProductHelper {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    price: Price,
    #[serde(rename = "image", default)]
    images: Vec<String>,
    #[serde(default)]
    category: String,
    #[serde(default, alias = "subCategory")]
    subcategory: String,
    #[serde(default)]
    sizes: Vec<String>,
    #[serde(default)]
    bestseller: bool,
    #[serde(rename = "date", default)]
    created_at: i64,
    #[serde(rename = "productid", default)]
    product_code: String,
}

impl Product {
    /// Builds a record from a normalized draft. Identity and creation time are
    /// fixed here and never touched again.
    pub fn from_draft(id: String, created_at: i64, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            images: draft.images,
            category: draft.category,
            subcategory: draft.subcategory,
            sizes: draft.sizes,
            bestseller: draft.bestseller,
            created_at,
            product_code: draft.product_code,
        }
    }

    /// Replaces every mutable field with the draft's values.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.images = draft.images;
        self.category = draft.category;
        self.subcategory = draft.subcategory;
        self.sizes = draft.sizes;
        self.bestseller = draft.bestseller;
        self.product_code = draft.product_code;
    }

    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            images: self.images.clone(),
            category: self.category.clone(),
            subcategory: self.subcategory.clone(),
            sizes: self.sizes.clone(),
            bestseller: self.bestseller,
            product_code: self.product_code.clone(),
        }
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn formatted_price(&self) -> String {
        self.price.formatted()
    }
}

/// The editable part of a product: everything except identity and creation time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub images: Vec<String>,
    pub category: String,
    pub subcategory: String,
    pub sizes: Vec<String>,
    pub bestseller: bool,
    pub product_code: String,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = subcategory.into();
        self
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    pub fn with_sizes(mut self, sizes: Vec<String>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_bestseller(mut self, bestseller: bool) -> Self {
        self.bestseller = bestseller;
        self
    }

    pub fn with_product_code(mut self, code: impl Into<String>) -> Self {
        self.product_code = code.into();
        self
    }

    /// Trims and dedupes the draft, then validates it.
    pub fn normalized(self) -> Result<Self> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::InvalidInput(
                "product name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            name,
            description: self.description.trim().to_string(),
            price: self.price,
            images: self
                .images
                .into_iter()
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty())
                .collect(),
            category: self.category.trim().to_string(),
            subcategory: self.subcategory.trim().to_string(),
            sizes: dedupe_sizes(self.sizes),
            bestseller: self.bestseller,
            product_code: self.product_code.trim().to_string(),
        })
    }
}

/// Trims size labels and drops empty and repeated entries, keeping first-seen order.
pub fn dedupe_sizes(sizes: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    sizes
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
