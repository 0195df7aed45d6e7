//! Product category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "product_category", rename_all = "lowercase")]
pub enum ProductCategory {
    Drink,
    Snack,
    Meal,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drink => "Drink",
            Self::Snack => "Snack",
            Self::Meal => "Meal",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
