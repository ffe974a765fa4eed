//! Default collection used when nothing has been saved yet.
//!
//! A fresh catalog starts with a single sample product so that listings,
//! sorting and export have something to show before the first `create`.

use rust_decimal::Decimal;

use crate::model::{Price, Product};

pub const SAMPLE_PRODUCT_ID: &str = "1";

/// 2024-01-01T00:00:00Z
const SAMPLE_CREATED_AT: i64 = 1_704_067_200_000;

pub fn default_products() -> Vec<Product> {
    vec![Product {
        id: SAMPLE_PRODUCT_ID.to_string(),
        name: "Sample Product".to_string(),
        description: "This is a sample product".to_string(),
        price: Price::new(Decimal::new(2999, 2)).unwrap_or_default(),
        images: vec![
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?auto=format&fit=crop&w=500&q=60"
                .to_string(),
        ],
        category: "electronics".to_string(),
        subcategory: "Audio".to_string(),
        sizes: Vec::new(),
        bestseller: true,
        created_at: SAMPLE_CREATED_AT,
        product_code: "SAMPLE-001".to_string(),
    }]
}
