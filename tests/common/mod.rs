#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use freight_registry::api::routes::protected_routes;
use freight_registry::application::services::auth_service::{generate_token, hash_token};
use freight_registry::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-signing-secret";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), TEST_SECRET.to_string())
}

/// Serves `/api` behind bearer authentication.
pub fn make_server(pool: PgPool) -> TestServer {
    let state = create_test_state(pool);
    let app = Router::new()
        .nest("/api", protected_routes(state.clone()))
        .with_state(state);
    TestServer::new(app).unwrap()
}

/// Stores a fresh token and returns its raw value.
pub async fn create_test_token(pool: &PgPool) -> String {
    let token = generate_token();

    sqlx::query("INSERT INTO api_tokens (name, token_hash) VALUES ($1, $2)")
        .bind("test")
        .bind(hash_token(TEST_SECRET, &token))
        .execute(pool)
        .await
        .unwrap();

    token
}

pub async fn create_test_country(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO countries (country_name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_city(pool: &PgPool, name: &str, country_id: i64) -> i64 {
    sqlx::query_scalar("INSERT INTO cities (city_name, country_id) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(country_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_freight(pool: &PgPool, name: &str, speditor: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO freights (freight_name, freight_speditor_name, freight_weights)
         VALUES ($1, $2, '10T, 20T') RETURNING id",
    )
    .bind(name)
    .bind(speditor)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
