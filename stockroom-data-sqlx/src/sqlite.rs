use std::str::FromStr;

use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqlitePoolOptions};

use stockroom_data::ProductRepository;

use crate::error::{SqlxErrorExt, SqlxResult};
use crate::query::Dialect;
use crate::repository::sqlx_product_repository;
use crate::settings::DatabaseSettings;

sqlx_product_repository!(
    /// [`ProductRepository`](stockroom_data::ProductRepository) over a SQLite pool.
    SqliteProductRepository,
    Sqlite,
    Dialect::Sqlite
);

impl SqliteProductRepository {
    /// Open a pool with `settings` and verify the database answers. File
    /// databases are created if missing.
    ///
    /// An in-memory database is held on a single connection that never
    /// expires; every other connection would see its own empty database.
    pub async fn connect(settings: &DatabaseSettings) -> SqlxResult<Self> {
        let options = SqliteConnectOptions::from_str(&settings.url)
            .map_err(SqlxErrorExt::into_data_error)?
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new().acquire_timeout(settings.acquire_timeout);
        pool_options = if settings.is_in_memory() {
            pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(settings.max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
        let repo = Self::new(pool);
        repo.ping().await?;
        tracing::info!(in_memory = settings.is_in_memory(), "Connected to sqlite");
        Ok(repo)
    }

    /// A fresh in-memory database with the schema already created.
    pub async fn in_memory() -> SqlxResult<Self> {
        let repo = Self::connect(&DatabaseSettings::new("sqlite::memory:")).await?;
        repo.create_schema().await?;
        Ok(repo)
    }
}
