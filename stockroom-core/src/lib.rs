//! # stockroom-core
//!
//! Runtime plumbing shared by the Stockroom crates: layered configuration,
//! tracing setup and HTTP layers, the uniform `{ "error": ... }` JSON body,
//! health reports, and the shutdown signal.

pub mod config;
pub mod error;
pub mod health;
pub mod layers;
pub mod shutdown;

pub use config::{ConfigError, ConfigValue, FromConfigValue, StockroomConfig};
pub use error::{error_response, internal_error_response, INTERNAL_SERVER_ERROR};
pub use health::{HealthCheck, HealthCheckStatus, HealthIndicator, HealthResponse, HealthStatus};
pub use layers::{catch_panic_layer, default_trace, init_tracing};
pub use shutdown::shutdown_signal;
