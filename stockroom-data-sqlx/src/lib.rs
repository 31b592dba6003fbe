//! # stockroom-data-sqlx
//!
//! SQLx persistence gateway for the `products` table. Implements
//! [`stockroom_data::ProductRepository`] for Postgres and SQLite; handlers
//! stay generic over the trait and never see a pool.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`PgProductRepository`] | Postgres backend (`postgres` feature) |
//! | [`SqliteProductRepository`] | SQLite backend (`sqlite` feature) |
//! | [`DatabaseSettings`] | URL, pool size, acquire timeout, schema auto-create |
//! | [`Backend`] | Backend selected from the URL scheme |
//! | [`EntityQueries`] | Statements rendered per [`Dialect`] |
//! | [`SqlxErrorExt`] | `sqlx::Error` → `DataError` (`.into_data_error()`) |
//!
//! ```ignore
//! let settings = DatabaseSettings::from_config(&config)?;
//! let repo = PgProductRepository::connect(&settings).await?;
//! if settings.auto_create_schema {
//!     repo.create_schema().await?;
//! }
//! ```

pub mod error;
pub mod query;
mod repository;
pub mod settings;

#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use error::{SqlxErrorExt, SqlxResult};
#[cfg(feature = "postgres")]
pub use postgres::PgProductRepository;
pub use query::{Dialect, EntityQueries};
pub use settings::{Backend, DatabaseSettings};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteProductRepository;
