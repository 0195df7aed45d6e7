//! Normalisation of requested order lines.

use std::collections::BTreeMap;

use uuid::Uuid;

use blacklight_core::error::AppError;
use blacklight_entity::order::OrderLine;

/// Validate quantities and merge repeated products into one line each.
///
/// The result is sorted by product id, which is also the order in which the
/// store locks product rows.
pub fn merge_lines(lines: &[OrderLine]) -> Result<Vec<OrderLine>, AppError> {
    if lines.is_empty() {
        return Err(AppError::validation("An order needs at least one item"));
    }

    let mut merged: BTreeMap<Uuid, i32> = BTreeMap::new();
    for line in lines {
        if line.quantity < 1 {
            return Err(AppError::validation(format!(
                "Quantity for product {} must be at least 1",
                line.product_id
            )));
        }
        let qty = merged.entry(line.product_id).or_insert(0);
        *qty = qty.checked_add(line.quantity).ok_or_else(|| {
            AppError::validation(format!("Quantity for product {} is too large", line.product_id))
        })?;
    }

    Ok(merged
        .into_iter()
        .map(|(product_id, quantity)| OrderLine {
            product_id,
            quantity,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_products_merge() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let merged = merge_lines(&[
            OrderLine { product_id: a, quantity: 1 },
            OrderLine { product_id: b, quantity: 2 },
            OrderLine { product_id: a, quantity: 3 },
        ])
        .unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.iter().find(|l| l.product_id == a).unwrap().quantity, 4);
        assert!(merged.windows(2).all(|w| w[0].product_id < w[1].product_id));
    }

    #[test]
    fn test_empty_and_zero_rejected() {
        assert!(merge_lines(&[]).is_err());
        let zero = OrderLine { product_id: Uuid::new_v4(), quantity: 0 };
        assert!(merge_lines(&[zero]).is_err());
    }
}
