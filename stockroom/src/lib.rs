//! # stockroom
//!
//! HTTP CRUD service for products. Handlers are generic over
//! [`stockroom_data::ProductRepository`]; the binary wires them to a SQLx
//! backend chosen from `database.url`.

pub mod app;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod settings;

pub use app::{run, StartupError};
pub use error::ApiError;
pub use routes::router;
pub use settings::ServerSettings;
