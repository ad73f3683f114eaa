//! Handlers for freight endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::freight::{FreightListResponse, FreightResponse};
use crate::api::dto::message::MessageResponse;
use crate::api::extractors::RawJson;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/freights`
pub async fn list_freights_handler(
    State(state): State<AppState>,
) -> Result<Json<FreightListResponse>, AppError> {
    let freights = state.freight_service.list_freights().await?;

    Ok(Json(FreightListResponse::new(freights)))
}

/// `POST /api/freights`
///
/// Both names must be unique; `freight_weights` is stored as given.
pub async fn create_freight_handler(
    State(state): State<AppState>,
    RawJson(raw): RawJson,
) -> Result<Json<FreightResponse>, AppError> {
    let freight = state.freight_service.create_freight(&raw).await?;

    Ok(Json(freight.into()))
}

/// `PUT /api/freights/{id}` (also `PATCH`)
pub async fn update_freight_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    RawJson(raw): RawJson,
) -> Result<Json<FreightResponse>, AppError> {
    let freight = state.freight_service.update_freight(id, &raw).await?;

    Ok(Json(freight.into()))
}

/// `DELETE /api/freights/{id}`
pub async fn delete_freight_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.freight_service.delete_freight(id).await?;

    Ok(Json(MessageResponse::deleted()))
}
