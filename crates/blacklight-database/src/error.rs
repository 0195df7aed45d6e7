//! Translation of PostgreSQL failures into domain errors.

use blacklight_core::error::{AppError, ErrorKind};

const EXCLUSION_VIOLATION: &str = "23P01";
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

const STOCK_CONSTRAINT: &str = "products_stock_non_negative";

/// Map a sqlx error, turning constraint violations into their domain kinds.
///
/// Anything that is not a recognised constraint becomes `Database` with
/// `context` as the message.
pub fn map_db_error(err: sqlx::Error, context: &str) -> AppError {
    if let Some(db) = err.as_database_error() {
        match db.code().as_deref() {
            Some(EXCLUSION_VIOLATION) => {
                return AppError::slot_conflict("The requested hours overlap an active booking");
            }
            Some(UNIQUE_VIOLATION) => {
                return AppError::conflict(format!("{context}: record already exists"));
            }
            Some(FOREIGN_KEY_VIOLATION) => {
                return AppError::conflict(format!("{context}: record is still referenced"));
            }
            Some(CHECK_VIOLATION) if db.constraint() == Some(STOCK_CONSTRAINT) => {
                return AppError::new(ErrorKind::InsufficientStock, "Not enough stock");
            }
            _ => {}
        }
    }
    AppError::with_source(ErrorKind::Database, context.to_string(), err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_database_kind() {
        let err = map_db_error(sqlx::Error::RowNotFound, "Failed to load booking");
        assert_eq!(err.kind, ErrorKind::Database);
        assert_eq!(err.message, "Failed to load booking");
    }
}
