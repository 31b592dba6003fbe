//! The HTTP scenarios again, over the real SQLite gateway.

use http::StatusCode;
use serde_json::json;
use stockroom::router;
use stockroom_data_sqlx::SqliteProductRepository;
use stockroom_test::TestApp;

async fn app() -> TestApp {
    let repo = SqliteProductRepository::in_memory().await.unwrap();
    TestApp::new(router(repo))
}

#[tokio::test]
async fn create_on_empty_table_then_get() {
    let app = app().await;
    let resp = app
        .post("/products")
        .json(&json!({"name": "Widget", "price": 10, "category": "Tools"}))
        .send()
        .await
        .assert_created();
    assert_eq!(
        resp.json::<serde_json::Value>(),
        json!({"id": 1, "name": "Widget", "price": 10, "category": "Tools"})
    );

    app.get("/products/1")
        .send()
        .await
        .assert_ok()
        .assert_json_path("id", 1)
        .assert_json_path("category", "Tools");
}

#[tokio::test]
async fn get_missing_is_a_404() {
    let app = app().await;
    app.get("/products/999")
        .send()
        .await
        .assert_not_found()
        .assert_error("Product not found");
}

#[tokio::test]
async fn invalid_update_leaves_row_unchanged() {
    let app = app().await;
    app.post("/products")
        .json(&json!({"name": "Widget", "price": 10, "category": "Tools"}))
        .send()
        .await
        .assert_created();

    app.put("/products/1")
        .json(&json!({"name": "", "price": 5, "category": "Tools"}))
        .send()
        .await
        .assert_bad_request()
        .assert_error("Name is required");
    app.get("/products/1")
        .send()
        .await
        .assert_ok()
        .assert_json_path("name", "Widget")
        .assert_json_path("price", 10);
}

#[tokio::test]
async fn update_replaces_fields_and_missing_id_is_a_404() {
    let app = app().await;
    app.post("/products")
        .json(&json!({"name": "Widget", "price": 10, "category": "Tools"}))
        .send()
        .await
        .assert_created();

    app.put("/products/1")
        .json(&json!({"name": "Gadget", "price": 25, "category": "Toys"}))
        .send()
        .await
        .assert_ok()
        .assert_json_path("id", 1)
        .assert_json_path("price", 25);
    app.get("/products/1")
        .send()
        .await
        .assert_ok()
        .assert_json_path("name", "Gadget");

    app.put("/products/42")
        .json(&json!({"name": "Gadget", "price": 25, "category": "Toys"}))
        .send()
        .await
        .assert_not_found()
        .assert_error("Product not found");
}

#[tokio::test]
async fn delete_twice_is_204_then_404() {
    let app = app().await;
    app.post("/products")
        .json(&json!({"name": "Widget", "price": 10, "category": "Tools"}))
        .send()
        .await
        .assert_created();

    let resp = app
        .delete("/products/1")
        .send()
        .await
        .assert_status(StatusCode::NO_CONTENT);
    assert!(resp.body.is_empty());
    app.delete("/products/1").send().await.assert_not_found();
    app.get("/products/1").send().await.assert_not_found();
}

#[tokio::test]
async fn ids_keep_increasing_after_delete() {
    let app = app().await;
    let body = json!({"name": "Widget", "price": 10, "category": "Tools"});
    app.post("/products").json(&body).send().await.assert_created();
    app.delete("/products/1")
        .send()
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.post("/products")
        .json(&body)
        .send()
        .await
        .assert_created()
        .assert_json_path("id", 2);
}

#[tokio::test]
async fn health_is_up() {
    let app = app().await;
    app.get("/health")
        .send()
        .await
        .assert_ok()
        .assert_json_path("status", "UP");
}
