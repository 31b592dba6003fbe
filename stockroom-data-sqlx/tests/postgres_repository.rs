#![cfg(feature = "postgres")]

//! Runs against the database in `STOCKROOM_TEST_POSTGRES_URL` and is skipped
//! when it is unset. The `products` table there is dropped and recreated.

use serial_test::serial;
use stockroom_data::{ProductInput, ProductRepository};
use stockroom_data_sqlx::{DatabaseSettings, PgProductRepository};

const URL_VAR: &str = "STOCKROOM_TEST_POSTGRES_URL";

/// A connected repository with no `products` table.
async fn fresh_repo() -> Option<PgProductRepository> {
    let Ok(url) = std::env::var(URL_VAR) else {
        eprintln!("{URL_VAR} not set, skipping");
        return None;
    };
    let repo = PgProductRepository::connect(&DatabaseSettings::new(url)).await.unwrap();
    sqlx::query("DROP TABLE IF EXISTS products")
        .execute(repo.pool())
        .await
        .unwrap();
    Some(repo)
}

#[tokio::test]
#[serial]
async fn four_byte_integer_table_round_trips() {
    let Some(repo) = fresh_repo().await else { return };
    sqlx::query("CREATE TABLE products (id SERIAL PRIMARY KEY, name TEXT, price INT, category TEXT)")
        .execute(repo.pool())
        .await
        .unwrap();

    let id = repo.insert(&ProductInput::new("Widget", 10, "Tools")).await.unwrap();
    assert_eq!(
        repo.fetch_by_id(id).await.unwrap(),
        ProductInput::new("Widget", 10, "Tools").into_product(id)
    );
    assert_eq!(
        repo.update_by_id(id, &ProductInput::new("Gadget", 25, "Toys")).await.unwrap(),
        1
    );
    assert_eq!(repo.fetch_by_id(id).await.unwrap().price, 25);
    assert_eq!(repo.delete_by_id(id).await.unwrap(), 1);
    assert!(repo.fetch_by_id(id).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[serial]
async fn created_schema_round_trips() {
    let Some(repo) = fresh_repo().await else { return };
    repo.create_schema().await.unwrap();
    let id = repo.insert(&ProductInput::new("Widget", 10, "Tools")).await.unwrap();
    assert_eq!(repo.fetch_by_id(id).await.unwrap().name, "Widget");
}
