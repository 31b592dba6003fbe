use axum::routing::{get, post};
use axum::Router;
use stockroom_core::{catch_panic_layer, default_trace};
use stockroom_data::ProductRepository;

use crate::handlers;

/// Build the service router over `repo`.
///
/// | Method | Path |
/// |--------|------|
/// | GET | `/` |
/// | GET | `/health` |
/// | POST | `/products` |
/// | GET, PUT, DELETE | `/products/{id}` |
///
/// Product paths also match with a trailing slash. Unknown paths answer 404
/// and known paths with the wrong method 405, both with the usual
/// `{"error": ...}` body.
pub fn router<R: ProductRepository>(repo: R) -> Router {
    let collection = post(handlers::create_product::<R>);
    let item = get(handlers::get_product::<R>)
        .put(handlers::update_product::<R>)
        .delete(handlers::delete_product::<R>);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health::<R>))
        .route("/products", collection.clone())
        .route("/products/", collection)
        .route("/products/{id}", item.clone())
        .route("/products/{id}/", item)
        .fallback(handlers::unknown_route)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(catch_panic_layer())
        .layer(default_trace())
        .with_state(repo)
}
