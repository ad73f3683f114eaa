//! Handlers for city endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::city::{CityListResponse, CityResponse};
use crate::api::dto::message::MessageResponse;
use crate::api::extractors::RawJson;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all cities, each with its country embedded.
///
/// # Endpoint
///
/// `GET /api/cities`
pub async fn list_cities_handler(
    State(state): State<AppState>,
) -> Result<Json<CityListResponse>, AppError> {
    let cities = state.city_service.list_cities().await?;

    Ok(Json(CityListResponse::new(cities)))
}

/// Creates a city.
///
/// # Endpoint
///
/// `POST /api/cities`
///
/// # Request Body
///
/// ```json
/// {"city_name": "Katowice", "country": 1}
/// ```
///
/// # Errors
///
/// Returns 422 if `city_name` is missing or taken, or if `country` is
/// missing, not an integer, or not an existing country id.
pub async fn create_city_handler(
    State(state): State<AppState>,
    RawJson(raw): RawJson,
) -> Result<Json<CityResponse>, AppError> {
    let city = state.city_service.create_city(&raw).await?;

    Ok(Json(city.into()))
}

/// Replaces a city.
///
/// # Endpoint
///
/// `PUT /api/cities/{id}` (also `PATCH`)
///
/// # Errors
///
/// Returns 404 if the city does not exist.
/// Returns 422 on validation failure.
pub async fn update_city_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    RawJson(raw): RawJson,
) -> Result<Json<CityResponse>, AppError> {
    let city = state.city_service.update_city(id, &raw).await?;

    Ok(Json(city.into()))
}

/// Deletes a city.
///
/// # Endpoint
///
/// `DELETE /api/cities/{id}`
pub async fn delete_city_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.city_service.delete_city(id).await?;

    Ok(Json(MessageResponse::deleted()))
}
