//! Process bootstrap: pick a store from config, prove it answers, serve.

use stockroom_core::{shutdown_signal, ConfigError, StockroomConfig};
use stockroom_data::{DataError, ProductRepository};
use stockroom_data_sqlx::{Backend, DatabaseSettings, PgProductRepository, SqliteProductRepository};
use tokio::net::TcpListener;

use crate::routes::router;
use crate::settings::ServerSettings;

/// Failures that stop the service before (or while) it serves.
#[derive(Debug)]
pub enum StartupError {
    Config(ConfigError),
    UnsupportedDatabaseUrl,
    Store(DataError),
    Io(std::io::Error),
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::Config(err) => write!(f, "Configuration error: {err}"),
            StartupError::UnsupportedDatabaseUrl => {
                f.write_str("database.url must start with postgres://, postgresql:// or sqlite:")
            }
            StartupError::Store(err) => write!(f, "Store unavailable: {err}"),
            StartupError::Io(err) => write!(f, "Server error: {err}"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::Config(err) => Some(err),
            StartupError::Store(err) => Some(err),
            StartupError::Io(err) => Some(err),
            StartupError::UnsupportedDatabaseUrl => None,
        }
    }
}

impl From<ConfigError> for StartupError {
    fn from(err: ConfigError) -> Self {
        StartupError::Config(err)
    }
}

impl From<DataError> for StartupError {
    fn from(err: DataError) -> Self {
        StartupError::Store(err)
    }
}

impl From<std::io::Error> for StartupError {
    fn from(err: std::io::Error) -> Self {
        StartupError::Io(err)
    }
}

/// Connect to the configured store and serve until a shutdown signal.
pub async fn run(config: StockroomConfig) -> Result<(), StartupError> {
    let server = ServerSettings::from_config(&config)?;
    let database = DatabaseSettings::from_config(&config)?;
    let backend = database
        .backend()
        .ok_or(StartupError::UnsupportedDatabaseUrl)?;
    tracing::info!(%backend, profile = config.profile(), "Starting stockroom");

    match backend {
        Backend::Postgres => {
            let repo = PgProductRepository::connect(&database).await?;
            if database.auto_create_schema {
                repo.create_schema().await?;
            }
            serve(repo.clone(), &server).await?;
            repo.pool().close().await;
        }
        Backend::Sqlite => {
            let repo = SqliteProductRepository::connect(&database).await?;
            if database.auto_create_schema {
                repo.create_schema().await?;
            }
            serve(repo.clone(), &server).await?;
            repo.pool().close().await;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn serve<R: ProductRepository>(repo: R, server: &ServerSettings) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(server.addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Listening");
    axum::serve(listener, router(repo))
        .with_graceful_shutdown(shutdown_signal())
        .await
}
