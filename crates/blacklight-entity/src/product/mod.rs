//! Café products.

pub mod category;
pub mod model;

pub use category::ProductCategory;
pub use model::{CreateProduct, Product, UpdateProduct};
