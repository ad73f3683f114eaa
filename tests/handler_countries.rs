mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

// ─── LIST ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_countries_list_empty(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let server = common::make_server(pool);

    let response = server.get("/api/countries").authorization_bearer(&token).await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "countries": [],
        "message": "Retrieved successfully."
    }));
}

#[sqlx::test]
async fn test_countries_list_ordered_by_id(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    common::create_test_country(&pool, "Poland").await;
    common::create_test_country(&pool, "Germany").await;
    let server = common::make_server(pool);

    let response = server.get("/api/countries").authorization_bearer(&token).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let countries = json["countries"].as_array().unwrap();

    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0]["country_name"], "Poland");
    assert_eq!(countries[1]["country_name"], "Germany");
    assert!(countries[0].get("created_at").is_some());
    assert!(countries[0].get("updated_at").is_some());
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_country_success(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let server = common::make_server(pool.clone());

    let response = server
        .post("/api/countries")
        .authorization_bearer(&token)
        .json(&json!({"country_name": "  Poland  "}))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["country"]["country_name"], "Poland");
    assert!(json["country"]["id"].as_i64().is_some());

    assert_eq!(common::count_rows(&pool, "countries").await, 1);
}

#[sqlx::test]
async fn test_create_country_missing_name(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let server = common::make_server(pool.clone());

    let response = server
        .post("/api/countries")
        .authorization_bearer(&token)
        .json(&json!({"country_name": ""}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    response.assert_json(&json!({
        "message": "The given data was invalid.",
        "errors": {"country_name": ["The country name field is required."]}
    }));
    assert_eq!(common::count_rows(&pool, "countries").await, 0);
}

#[sqlx::test]
async fn test_create_country_empty_body(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/countries")
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>()["errors"]["country_name"][0],
        "The country name field is required."
    );
}

#[sqlx::test]
async fn test_create_country_duplicate(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    common::create_test_country(&pool, "Poland").await;
    let server = common::make_server(pool.clone());

    let response = server
        .post("/api/countries")
        .authorization_bearer(&token)
        .json(&json!({"country_name": "Poland"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>()["errors"]["country_name"][0],
        "The country name has already been taken."
    );
    assert_eq!(common::count_rows(&pool, "countries").await, 1);
}

#[sqlx::test]
async fn test_create_country_malformed_body(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/countries")
        .authorization_bearer(&token)
        .text("{\"country_name\": ")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["message"].is_string());
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_country_keeps_own_name(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let id = common::create_test_country(&pool, "Poland").await;
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/api/countries/{id}"))
        .authorization_bearer(&token)
        .json(&json!({"country_name": "Poland"}))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["country"]["id"], id);
}

#[sqlx::test]
async fn test_update_country_rename_via_patch(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let id = common::create_test_country(&pool, "Polska").await;
    let server = common::make_server(pool.clone());

    let response = server
        .patch(&format!("/api/countries/{id}"))
        .authorization_bearer(&token)
        .json(&json!({"country_name": "Poland"}))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["country"]["country_name"], "Poland");

    let stored: String = sqlx::query_scalar("SELECT country_name FROM countries WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "Poland");
}

#[sqlx::test]
async fn test_update_country_to_taken_name(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    common::create_test_country(&pool, "Poland").await;
    let id = common::create_test_country(&pool, "Germany").await;
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/api/countries/{id}"))
        .authorization_bearer(&token)
        .json(&json!({"country_name": "Poland"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>()["errors"]["country_name"][0],
        "The country name has already been taken."
    );
}

#[sqlx::test]
async fn test_update_country_not_found(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .put("/api/countries/99999")
        .authorization_bearer(&token)
        .json(&json!({"country_name": "Poland"}))
        .await;

    response.assert_status_not_found();
    response.assert_json(&json!({"message": "Record not found."}));
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_country_success(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let id = common::create_test_country(&pool, "Poland").await;
    let server = common::make_server(pool.clone());

    let response = server
        .delete(&format!("/api/countries/{id}"))
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({"message": "Record has been deleted."}));

    let list = server.get("/api/countries").authorization_bearer(&token).await;
    assert!(list.json::<Value>()["countries"].as_array().unwrap().is_empty());
}

#[sqlx::test]
async fn test_delete_country_referenced_by_city(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let id = common::create_test_country(&pool, "Poland").await;
    common::create_test_city(&pool, "Katowice", id).await;
    let server = common::make_server(pool.clone());

    let response = server
        .delete(&format!("/api/countries/{id}"))
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    response.assert_json(&json!({"message": "Something went wrong!"}));
    assert_eq!(common::count_rows(&pool, "countries").await, 1);
}

#[sqlx::test]
async fn test_delete_country_not_found(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .delete("/api/countries/99999")
        .authorization_bearer(&token)
        .await;

    response.assert_status_not_found();
    response.assert_json(&json!({"message": "Record not found."}));
}
