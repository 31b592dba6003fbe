mod app;
mod repository;

pub use app::{resolve_path, TestApp, TestRequest, TestResponse};
pub use repository::{InMemoryProductRepository, Operation};
