//! # stockroom-data
//!
//! The Product entity, its validation rules, and the [`ProductRepository`]
//! contract that every persistence gateway implements. Backends live in
//! separate crates (`stockroom-data-sqlx`); handlers only see this trait.

pub mod entity;
pub mod error;
pub mod product;
pub mod repository;

pub use entity::Entity;
pub use error::DataError;
pub use product::{Product, ProductInput, ValidationError};
pub use repository::ProductRepository;
