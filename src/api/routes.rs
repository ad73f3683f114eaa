//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_city_handler, create_country_handler, create_freight_handler, delete_city_handler,
    delete_country_handler, delete_freight_handler, list_cities_handler, list_countries_handler,
    list_freights_handler, update_city_handler, update_country_handler, update_freight_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{Router, middleware, routing::get, routing::put};

/// All API routes, without authentication.
///
/// # Endpoints
///
/// - `GET    /countries`       - List countries
/// - `POST   /countries`       - Create a country
/// - `PUT    /countries/{id}`  - Replace a country (`PATCH` is an alias)
/// - `DELETE /countries/{id}`  - Delete a country
/// - `GET    /cities`          - List cities with their countries
/// - `POST   /cities`          - Create a city
/// - `PUT    /cities/{id}`     - Replace a city (`PATCH` is an alias)
/// - `DELETE /cities/{id}`     - Delete a city
/// - `GET    /freights`        - List freight records
/// - `POST   /freights`        - Create a freight record
/// - `PUT    /freights/{id}`   - Replace a freight record (`PATCH` is an alias)
/// - `DELETE /freights/{id}`   - Delete a freight record
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/countries",
            get(list_countries_handler).post(create_country_handler),
        )
        .route(
            "/countries/{id}",
            put(update_country_handler)
                .patch(update_country_handler)
                .delete(delete_country_handler),
        )
        .route(
            "/cities",
            get(list_cities_handler).post(create_city_handler),
        )
        .route(
            "/cities/{id}",
            put(update_city_handler)
                .patch(update_city_handler)
                .delete(delete_city_handler),
        )
        .route(
            "/freights",
            get(list_freights_handler).post(create_freight_handler),
        )
        .route(
            "/freights/{id}",
            put(update_freight_handler)
                .patch(update_freight_handler)
                .delete(delete_freight_handler),
        )
}

/// API routes protected by Bearer token authentication.
///
/// Authentication is a route layer, so unknown paths still answer 404
/// rather than 401.
pub fn protected_routes(state: AppState) -> Router<AppState> {
    routes().route_layer(middleware::from_fn_with_state(state, auth::layer))
}
