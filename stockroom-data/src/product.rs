use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// A stored product row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub category: String,
}

impl Entity for Product {
    fn table_name() -> &'static str {
        "products"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "name", "price", "category"]
    }

    fn integer_columns() -> &'static [&'static str] {
        &["id", "price"]
    }
}

/// The mutable fields of a product, as accepted by create and update.
///
/// Missing fields deserialize to their zero value and are then rejected by
/// [`ProductInput::validate`]. Any `id` in the payload is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub category: String,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, price: i64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
        }
    }

    /// Check the field rules in order; the first failing rule wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.price <= 0 {
            return Err(ValidationError::PriceNotPositive);
        }
        if self.category.is_empty() {
            return Err(ValidationError::CategoryRequired);
        }
        Ok(())
    }

    /// Attach a store-assigned id.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
        }
    }
}

impl From<Product> for ProductInput {
    fn from(product: Product) -> Self {
        ProductInput {
            name: product.name,
            price: product.price,
            category: product.category,
        }
    }
}

/// A violated product field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NameRequired,
    PriceNotPositive,
    CategoryRequired,
}

impl ValidationError {
    /// The client-facing message for this rule.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "Name is required",
            ValidationError::PriceNotPositive => "Price must be greater than 0",
            ValidationError::CategoryRequired => "Category is required",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}
