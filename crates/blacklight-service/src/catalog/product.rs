//! Café product catalog.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use blacklight_core::error::AppError;
use blacklight_core::result::AppResult;
use blacklight_database::store::ProductStore;
use blacklight_entity::product::{CreateProduct, Product, ProductCategory, UpdateProduct};

use crate::context::RequestContext;

#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }

    pub async fn list(&self, category: Option<ProductCategory>) -> AppResult<Vec<Product>> {
        self.products.list(category).await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Product> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))
    }

    pub async fn create(&self, ctx: &RequestContext, mut data: CreateProduct) -> AppResult<Product> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Product name must not be empty"));
        }
        data.name = name.to_string();
        ensure_price(data.price)?;
        ensure_stock(data.stock)?;

        let product = self.products.create(&data).await?;
        info!(product_id = %product.id, name = %product.name, stock = product.stock, by = %ctx.user_id, "Product created");
        Ok(product)
    }

    /// Setting `stock` replaces the count outright; it is how admins restock.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateProduct,
    ) -> AppResult<Product> {
        if data.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::validation("Product name must not be empty"));
        }
        if let Some(price) = data.price {
            ensure_price(price)?;
        }
        if let Some(stock) = data.stock {
            ensure_stock(stock)?;
        }

        let product = self
            .products
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))?;
        info!(product_id = %id, stock = product.stock, by = %ctx.user_id, "Product updated");
        Ok(product)
    }

    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        if !self.products.delete(id).await? {
            return Err(AppError::not_found(format!("Product {id} not found")));
        }
        info!(product_id = %id, by = %ctx.user_id, "Product deleted");
        Ok(())
    }
}

fn ensure_price(price: Decimal) -> AppResult<()> {
    if price < Decimal::ZERO {
        return Err(AppError::validation("Price must not be negative"));
    }
    Ok(())
}

fn ensure_stock(stock: i32) -> AppResult<()> {
    if stock < 0 {
        return Err(AppError::validation("Stock must not be negative"));
    }
    Ok(())
}
