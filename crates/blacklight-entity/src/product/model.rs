//! Product entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::category::ProductCategory;

/// A café item sold from stock.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: ProductCategory,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Units on hand. Never negative.
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether `quantity` units can be taken from stock.
    pub fn has_stock_for(&self, quantity: i32) -> bool {
        quantity <= self.stock
    }
}

/// Data required to create a product.
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: ProductCategory,
    pub price: Decimal,
    pub stock: i32,
}

/// Partial product update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<ProductCategory>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
}

impl UpdateProduct {
    /// Apply the changes to an existing product in place.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(v) = &self.name {
            product.name = v.clone();
        }
        if let Some(v) = &self.description {
            product.description = Some(v.clone());
        }
        if let Some(v) = &self.image {
            product.image = Some(v.clone());
        }
        if let Some(v) = self.category {
            product.category = v;
        }
        if let Some(v) = self.price {
            product.price = v;
        }
        if let Some(v) = self.stock {
            product.stock = v;
        }
    }
}
