mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_cities_list_embeds_country(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let poland = common::create_test_country(&pool, "Poland").await;
    common::create_test_city(&pool, "Katowice", poland).await;
    let server = common::make_server(pool);

    let response = server.get("/api/cities").authorization_bearer(&token).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["message"], "Retrieved successfully.");

    let city = &json["cities"][0];
    assert_eq!(city["city_name"], "Katowice");
    assert_eq!(city["country_id"], poland);
    assert_eq!(city["country"]["id"], poland);
    assert_eq!(city["country"]["country_name"], "Poland");
    assert!(city["country"].get("created_at").is_some());
}

#[sqlx::test]
async fn test_create_city_returns_created_row(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let poland = common::create_test_country(&pool, "Poland").await;
    let germany = common::create_test_country(&pool, "Germany").await;
    common::create_test_city(&pool, "Katowice", poland).await;
    let server = common::make_server(pool.clone());

    let response = server
        .post("/api/cities")
        .authorization_bearer(&token)
        .json(&json!({"city_name": "Berlin", "country": germany}))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["city"]["city_name"], "Berlin");
    assert_eq!(json["city"]["country_id"], germany);
    assert_eq!(json["city"]["country"]["country_name"], "Germany");

    assert_eq!(common::count_rows(&pool, "cities").await, 2);
}

#[sqlx::test]
async fn test_create_city_country_as_numeric_string(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let poland = common::create_test_country(&pool, "Poland").await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/cities")
        .authorization_bearer(&token)
        .json(&json!({"city_name": "Katowice", "country": poland.to_string()}))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["city"]["country_id"], poland);
}

#[sqlx::test]
async fn test_create_city_country_not_integer(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let server = common::make_server(pool.clone());

    let response = server
        .post("/api/cities")
        .authorization_bearer(&token)
        .json(&json!({"city_name": "Katowice", "country": "Poland"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    response.assert_json(&json!({
        "message": "The given data was invalid.",
        "errors": {"country": ["The country must be an integer."]}
    }));
    assert_eq!(common::count_rows(&pool, "cities").await, 0);
}

#[sqlx::test]
async fn test_create_city_unknown_country(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/cities")
        .authorization_bearer(&token)
        .json(&json!({"city_name": "Katowice", "country": 99999}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>()["errors"]["country"][0],
        "The selected country is invalid."
    );
}

#[sqlx::test]
async fn test_create_city_missing_fields(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/cities")
        .authorization_bearer(&token)
        .json(&json!({"city_name": "   "}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    response.assert_json(&json!({
        "message": "The given data was invalid.",
        "errors": {
            "city_name": ["The city name field is required."],
            "country": ["The country field is required."]
        }
    }));
}

#[sqlx::test]
async fn test_create_city_duplicate_name(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let poland = common::create_test_country(&pool, "Poland").await;
    common::create_test_city(&pool, "Katowice", poland).await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/cities")
        .authorization_bearer(&token)
        .json(&json!({"city_name": "Katowice", "country": poland}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>()["errors"]["city_name"][0],
        "The city name has already been taken."
    );
}

#[sqlx::test]
async fn test_update_city_moves_country(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let poland = common::create_test_country(&pool, "Poland").await;
    let germany = common::create_test_country(&pool, "Germany").await;
    let id = common::create_test_city(&pool, "Breslau", germany).await;
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/api/cities/{id}"))
        .authorization_bearer(&token)
        .json(&json!({"city_name": "Wroclaw", "country": poland}))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["city"]["id"], id);
    assert_eq!(json["city"]["city_name"], "Wroclaw");
    assert_eq!(json["city"]["country"]["country_name"], "Poland");
}

#[sqlx::test]
async fn test_update_city_keeps_own_name(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let poland = common::create_test_country(&pool, "Poland").await;
    let id = common::create_test_city(&pool, "Katowice", poland).await;
    let server = common::make_server(pool);

    let response = server
        .patch(&format!("/api/cities/{id}"))
        .authorization_bearer(&token)
        .json(&json!({"city_name": "Katowice", "country": poland}))
        .await;

    response.assert_status_ok();
}

#[sqlx::test]
async fn test_update_city_not_found(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let poland = common::create_test_country(&pool, "Poland").await;
    let server = common::make_server(pool);

    let response = server
        .put("/api/cities/99999")
        .authorization_bearer(&token)
        .json(&json!({"city_name": "Katowice", "country": poland}))
        .await;

    response.assert_status_not_found();
    response.assert_json(&json!({"message": "Record not found."}));
}

#[sqlx::test]
async fn test_delete_city_success(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let poland = common::create_test_country(&pool, "Poland").await;
    let id = common::create_test_city(&pool, "Katowice", poland).await;
    let server = common::make_server(pool.clone());

    let response = server
        .delete(&format!("/api/cities/{id}"))
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({"message": "Record has been deleted."}));
    assert_eq!(common::count_rows(&pool, "cities").await, 0);
    assert_eq!(common::count_rows(&pool, "countries").await, 1);
}

#[sqlx::test]
async fn test_delete_city_not_found(pool: PgPool) {
    let token = common::create_test_token(&pool).await;
    let poland = common::create_test_country(&pool, "Poland").await;
    common::create_test_city(&pool, "Katowice", poland).await;
    let server = common::make_server(pool.clone());

    let response = server
        .delete("/api/cities/99999")
        .authorization_bearer(&token)
        .await;

    response.assert_status_not_found();
    response.assert_json(&json!({"message": "Record not found."}));
    assert_eq!(common::count_rows(&pool, "cities").await, 1);
}
