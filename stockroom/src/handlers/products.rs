use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use stockroom_data::{Product, ProductInput, ProductRepository};

use crate::error::ApiError;

fn product_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    let Path(id) = path.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected product id");
        ApiError::InvalidId
    })?;
    tracing::Span::current().record("id", id);
    Ok(id)
}

fn product_input(body: Result<Json<ProductInput>, JsonRejection>) -> Result<ProductInput, ApiError> {
    let Json(input) = body.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected product body");
        ApiError::MalformedRequest
    })?;
    input.validate()?;
    Ok(input)
}

#[tracing::instrument(skip_all)]
pub async fn create_product<R: ProductRepository>(
    State(repo): State<R>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let input = product_input(body)?;
    let id = repo
        .insert(&input)
        .await
        .map_err(ApiError::store("Could not create product"))?;
    tracing::info!(id, "Product created");
    Ok((StatusCode::CREATED, Json(input.into_product(id))))
}

#[tracing::instrument(skip_all, fields(id = tracing::field::Empty))]
pub async fn get_product<R: ProductRepository>(
    State(repo): State<R>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = product_id(path)?;
    match repo.fetch_by_id(id).await {
        Ok(product) => Ok(Json(product)),
        Err(err) if err.is_not_found() => Err(ApiError::NotFound),
        Err(err) => Err(ApiError::store("Could not retrieve product")(err)),
    }
}

#[tracing::instrument(skip_all, fields(id = tracing::field::Empty))]
pub async fn update_product<R: ProductRepository>(
    State(repo): State<R>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = product_id(path)?;
    let input = product_input(body)?;
    let affected = repo
        .update_by_id(id, &input)
        .await
        .map_err(ApiError::store("Could not update product"))?;
    if affected == 0 {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Product updated");
    Ok(Json(input.into_product(id)))
}

#[tracing::instrument(skip_all, fields(id = tracing::field::Empty))]
pub async fn delete_product<R: ProductRepository>(
    State(repo): State<R>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = product_id(path)?;
    let affected = repo
        .delete_by_id(id)
        .await
        .map_err(ApiError::store("Could not delete product"))?;
    if affected == 0 {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
