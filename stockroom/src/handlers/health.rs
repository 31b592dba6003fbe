use axum::extract::State;
use stockroom_core::{HealthCheck, HealthIndicator, HealthResponse, HealthStatus};
use stockroom_data::ProductRepository;

/// Probes the product store with [`ProductRepository::ping`].
pub struct StoreHealth<'a, R>(pub &'a R);

impl<R: ProductRepository> HealthIndicator for StoreHealth<'_, R> {
    fn name(&self) -> &str {
        "database"
    }

    async fn check(&self) -> HealthStatus {
        match self.0.ping().await {
            Ok(()) => HealthStatus::Up,
            Err(err) => {
                tracing::warn!(error = %err, "Store health check failed");
                HealthStatus::Down(err.to_string())
            }
        }
    }
}

pub async fn health<R: ProductRepository>(State(repo): State<R>) -> HealthResponse {
    HealthResponse::from_checks(vec![HealthCheck::run(&StoreHealth(&repo)).await])
}
