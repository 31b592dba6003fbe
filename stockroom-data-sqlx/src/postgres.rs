use sqlx::postgres::{PgPoolOptions, Postgres};

use stockroom_data::ProductRepository;

use crate::error::{SqlxErrorExt, SqlxResult};
use crate::query::Dialect;
use crate::repository::sqlx_product_repository;
use crate::settings::DatabaseSettings;

sqlx_product_repository!(
    /// [`ProductRepository`](stockroom_data::ProductRepository) over a Postgres pool.
    PgProductRepository,
    Postgres,
    Dialect::Postgres
);

impl PgProductRepository {
    /// Open a pool with `settings` and verify the server answers.
    pub async fn connect(settings: &DatabaseSettings) -> SqlxResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect(&settings.url)
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
        let repo = Self::new(pool);
        repo.ping().await?;
        tracing::info!(max_connections = settings.max_connections, "Connected to postgres");
        Ok(repo)
    }
}
