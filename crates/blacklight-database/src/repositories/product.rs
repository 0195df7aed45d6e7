//! Product repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use blacklight_core::result::AppResult;
use blacklight_entity::product::{CreateProduct, Product, ProductCategory, UpdateProduct};

use crate::error::map_db_error;
use crate::store::ProductStore;

#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to find product"))
    }

    async fn list(&self, category: Option<ProductCategory>) -> AppResult<Vec<Product>> {
        sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE ($1::product_category IS NULL OR category = $1) ORDER BY name ASC",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to list products"))
    }

    async fn create(&self, data: &CreateProduct) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            r#"INSERT INTO products (id, name, description, image, category, price, stock)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING *"#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.image)
        .bind(data.category)
        .bind(data.price)
        .bind(data.stock)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to create product"))
    }

    async fn update(&self, id: Uuid, data: &UpdateProduct) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>(
            r#"UPDATE products SET
                   name = COALESCE($2, name),
                   description = COALESCE($3, description),
                   image = COALESCE($4, image),
                   category = COALESCE($5, category),
                   price = COALESCE($6, price),
                   stock = COALESCE($7, stock),
                   updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.image)
        .bind(data.category)
        .bind(data.price)
        .bind(data.stock)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to update product"))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to delete product"))?;
        Ok(result.rows_affected() > 0)
    }
}
