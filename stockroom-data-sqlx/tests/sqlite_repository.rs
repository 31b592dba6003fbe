#![cfg(feature = "sqlite")]

use stockroom_data::{DataError, ProductInput, ProductRepository};
use stockroom_data_sqlx::{DatabaseSettings, SqliteProductRepository};

async fn repo() -> SqliteProductRepository {
    SqliteProductRepository::in_memory().await.unwrap()
}

#[tokio::test]
async fn insert_then_fetch() {
    let repo = repo().await;
    let id = repo.insert(&ProductInput::new("Widget", 10, "Tools")).await.unwrap();
    assert_eq!(id, 1);

    let product = repo.fetch_by_id(id).await.unwrap();
    assert_eq!(product, ProductInput::new("Widget", 10, "Tools").into_product(1));
}

#[tokio::test]
async fn fetch_missing_is_not_found() {
    let repo = repo().await;
    let err = repo.fetch_by_id(999).await.unwrap_err();
    assert!(matches!(err, DataError::NotFound(_)));
}

#[tokio::test]
async fn update_replaces_all_fields() {
    let repo = repo().await;
    let id = repo.insert(&ProductInput::new("Widget", 10, "Tools")).await.unwrap();

    let affected = repo
        .update_by_id(id, &ProductInput::new("Gadget", 25, "Toys"))
        .await
        .unwrap();
    assert_eq!(affected, 1);
    assert_eq!(
        repo.fetch_by_id(id).await.unwrap(),
        ProductInput::new("Gadget", 25, "Toys").into_product(id)
    );
}

#[tokio::test]
async fn update_and_delete_missing_affect_nothing() {
    let repo = repo().await;
    let input = ProductInput::new("Widget", 10, "Tools");
    assert_eq!(repo.update_by_id(42, &input).await.unwrap(), 0);
    assert_eq!(repo.delete_by_id(42).await.unwrap(), 0);
}

#[tokio::test]
async fn delete_removes_row_and_ids_are_not_reused() {
    let repo = repo().await;
    let first = repo.insert(&ProductInput::new("Widget", 10, "Tools")).await.unwrap();
    assert_eq!(repo.delete_by_id(first).await.unwrap(), 1);
    assert!(repo.fetch_by_id(first).await.unwrap_err().is_not_found());

    let second = repo.insert(&ProductInput::new("Gadget", 5, "Toys")).await.unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn schema_rejects_invalid_rows() {
    let repo = repo().await;
    let err = repo.insert(&ProductInput::new("", 10, "Tools")).await.unwrap_err();
    assert!(matches!(err, DataError::Database(_)));
}

#[tokio::test]
async fn create_schema_is_idempotent() {
    let repo = repo().await;
    repo.create_schema().await.unwrap();
    repo.ping().await.unwrap();
}

#[tokio::test]
async fn file_database_is_created_if_missing() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("stock.db").display());
    let repo = SqliteProductRepository::connect(&DatabaseSettings::new(url)).await.unwrap();
    repo.create_schema().await.unwrap();
    let id = repo.insert(&ProductInput::new("Widget", 1, "Tools")).await.unwrap();
    assert_eq!(repo.fetch_by_id(id).await.unwrap().name, "Widget");
}

#[tokio::test]
async fn connect_fails_when_database_cannot_open() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("missing").join("stock.db").display());
    let err = SqliteProductRepository::connect(&DatabaseSettings::new(url))
        .await
        .unwrap_err();
    assert!(matches!(err, DataError::Database(_)));
}
