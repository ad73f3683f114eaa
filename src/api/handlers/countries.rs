//! Handlers for country endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::country::{CountryListResponse, CountryResponse};
use crate::api::dto::message::MessageResponse;
use crate::api::extractors::RawJson;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all countries.
///
/// # Endpoint
///
/// `GET /api/countries`
pub async fn list_countries_handler(
    State(state): State<AppState>,
) -> Result<Json<CountryListResponse>, AppError> {
    let countries = state.country_service.list_countries().await?;

    Ok(Json(CountryListResponse::new(countries)))
}

/// Creates a country.
///
/// # Endpoint
///
/// `POST /api/countries`
///
/// # Errors
///
/// Returns 422 if `country_name` is missing or already taken.
pub async fn create_country_handler(
    State(state): State<AppState>,
    RawJson(raw): RawJson,
) -> Result<Json<CountryResponse>, AppError> {
    let country = state.country_service.create_country(&raw).await?;

    Ok(Json(country.into()))
}

/// Replaces a country's name.
///
/// # Endpoint
///
/// `PUT /api/countries/{id}` (also `PATCH`)
///
/// # Errors
///
/// Returns 404 if the country does not exist.
/// Returns 422 if `country_name` is missing or taken by another country.
pub async fn update_country_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    RawJson(raw): RawJson,
) -> Result<Json<CountryResponse>, AppError> {
    let country = state.country_service.update_country(id, &raw).await?;

    Ok(Json(country.into()))
}

/// Deletes a country.
///
/// # Endpoint
///
/// `DELETE /api/countries/{id}`
///
/// # Errors
///
/// Returns 404 if the country does not exist.
/// Returns 422 if cities still reference it.
pub async fn delete_country_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.country_service.delete_country(id).await?;

    Ok(Json(MessageResponse::deleted()))
}
