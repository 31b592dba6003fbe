//! Health reporting for the `/health` endpoint.
//!
//! A [`HealthIndicator`] probes one dependency (e.g. the database). The
//! service runs its indicators and folds the results into a
//! [`HealthResponse`], which renders as `200` when every check is up and
//! `503` otherwise.
//!
//! ```ignore
//! struct DbHealth { pool: PgPool }
//!
//! impl HealthIndicator for DbHealth {
//!     fn name(&self) -> &str { "db" }
//!     async fn check(&self) -> HealthStatus {
//!         match sqlx::query("SELECT 1").execute(&self.pool).await {
//!             Ok(_) => HealthStatus::Up,
//!             Err(e) => HealthStatus::Down(e.to_string()),
//!         }
//!     }
//! }
//! ```

use std::time::Instant;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Result of a single health check.
#[derive(Debug, Clone, PartialEq)]
pub enum HealthStatus {
    Up,
    Down(String),
}

/// A named health indicator.
pub trait HealthIndicator: Send + Sync {
    /// The name of this health check (e.g. `"db"`).
    fn name(&self) -> &str;

    /// Perform the health check.
    fn check(&self) -> impl std::future::Future<Output = HealthStatus> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthCheckStatus {
    Up,
    Down,
}

/// A single check result in the health response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthCheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub duration_ms: u64,
}

impl HealthCheck {
    /// Run `indicator` and record its outcome and latency.
    pub async fn run(indicator: &impl HealthIndicator) -> Self {
        let start = Instant::now();
        let status = indicator.check().await;
        let duration_ms = start.elapsed().as_millis() as u64;
        let (status, reason) = match status {
            HealthStatus::Up => (HealthCheckStatus::Up, None),
            HealthStatus::Down(reason) => (HealthCheckStatus::Down, Some(reason)),
        };
        HealthCheck {
            name: indicator.name().to_string(),
            status,
            reason,
            duration_ms,
        }
    }
}

/// Aggregated health response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: HealthCheckStatus,
    pub checks: Vec<HealthCheck>,
}

impl HealthResponse {
    /// Aggregate individual checks; the service is up only if all checks are.
    pub fn from_checks(checks: Vec<HealthCheck>) -> Self {
        let status = if checks.iter().all(|c| c.status == HealthCheckStatus::Up) {
            HealthCheckStatus::Up
        } else {
            HealthCheckStatus::Down
        };
        HealthResponse { status, checks }
    }
}

impl IntoResponse for HealthResponse {
    fn into_response(self) -> Response {
        let status = match self.status {
            HealthCheckStatus::Up => StatusCode::OK,
            HealthCheckStatus::Down => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, Json(self)).into_response()
    }
}
