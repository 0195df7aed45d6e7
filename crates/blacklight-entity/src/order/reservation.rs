//! All-or-nothing stock check for a set of order lines.

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use blacklight_core::{AppError, AppResult};

use super::item::OrderLine;
use crate::product::Product;

/// A line that passed the stock check, priced from the current catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservedLine {
    pub product_id: Uuid,
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: i32,
    /// Stock left once this line is taken.
    pub remaining_stock: i32,
}

impl ReservedLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Check every line against the given products before anything is touched.
///
/// Fails on the first missing product or short line; callers apply the
/// decrements only when this returns `Ok`. Lines must already be merged so
/// each product appears once.
pub fn reserve_lines(
    lines: &[OrderLine],
    products: &HashMap<Uuid, Product>,
) -> AppResult<Vec<ReservedLine>> {
    lines
        .iter()
        .map(|line| {
            let product = products.get(&line.product_id).ok_or_else(|| {
                AppError::not_found(format!("Product {} not found", line.product_id))
            })?;
            if !product.has_stock_for(line.quantity) {
                return Err(AppError::insufficient_stock(
                    product.id,
                    format!(
                        "Only {} of '{}' in stock, {} requested",
                        product.stock, product.name, line.quantity
                    ),
                ));
            }
            Ok(ReservedLine {
                product_id: product.id,
                product_name: product.name.clone(),
                unit_price: product.price,
                quantity: line.quantity,
                remaining_stock: product.stock - line.quantity,
            })
        })
        .collect()
}

/// Sum of `price * quantity` over the reserved lines.
pub fn reserved_total(lines: &[ReservedLine]) -> Decimal {
    lines.iter().map(ReservedLine::line_total).sum()
}
