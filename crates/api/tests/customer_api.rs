//! HTTP-level integration tests for the customers resource.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

fn customer_payload(name: &str) -> serde_json::Value {
    serde_json::json!({
        "organization_name": name,
        "industry": "Hospitality",
        "website": "https://example.com",
        "primary_contact_name": "Barliman Butterbur",
        "primary_contact_email": "barliman@example.com",
        "primary_contact_phone": "+44 1234 567890",
        "address": "1 Bree Road",
        "notes": "Key account"
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_customer_returns_201_and_round_trips(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.router(),
        "/api/v1/customers",
        customer_payload("The Prancing Pony"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert!(created["id"].is_number());
    assert!(created["created_at"].is_string());
    let id = created["id"].as_i64().unwrap();

    let response = get(app.router(), &format!("/api/v1/customers/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["organization_name"], "The Prancing Pony");
    assert_eq!(fetched["industry"], "Hospitality");
    assert_eq!(fetched["primary_contact_email"], "barliman@example.com");
    assert_eq!(fetched["notes"], "Key account");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_customer_with_blank_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.router(),
        "/api/v1/customers",
        serde_json::json!({"organization_name": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_customer_without_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.router(),
        "/api/v1/customers",
        serde_json::json!({"industry": "Hospitality"}),
    )
    .await;
    // Missing required field is rejected at deserialization.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_customer_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.router(), "/api/v1/customers/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn partial_update_changes_only_supplied_fields(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json(
            app.router(),
            "/api/v1/customers",
            customer_payload("Old Name"),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        app.router(),
        &format!("/api/v1/customers/{id}"),
        serde_json::json!({"organization_name": "New Name"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["organization_name"], "New Name");
    // Omitted fields retain prior values.
    assert_eq!(updated["industry"], "Hospitality");
    assert_eq!(updated["primary_contact_name"], "Barliman Butterbur");
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_customer_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = put_json(
        app.router(),
        "/api/v1/customers/999999",
        serde_json::json!({"organization_name": "Nobody"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_customer_returns_204_then_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json(
            app.router(),
            "/api/v1/customers",
            customer_payload("Doomed"),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = delete(app.router(), &format!("/api/v1/customers/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.router(), &format!("/api/v1/customers/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app.router(), &format!("/api/v1/customers/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_customers_is_paginated(pool: PgPool) {
    let app = common::build_test_app(pool);

    for i in 0..3 {
        post_json(
            app.router(),
            "/api/v1/customers",
            customer_payload(&format!("Org {i}")),
        )
        .await;
    }

    let response = get(app.router(), "/api/v1/customers").await;
    assert_eq!(response.status(), StatusCode::OK);
    let all = body_json(response).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let response = get(app.router(), "/api/v1/customers?limit=2&offset=2").await;
    let page = body_json(response).await;
    assert_eq!(page.as_array().unwrap().len(), 1);
}
