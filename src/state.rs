//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, CityService, CountryService, FreightService};
use crate::infrastructure::persistence::{
    PgCityRepository, PgCountryRepository, PgFreightRepository, PgTokenRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub country_service: Arc<CountryService<PgCountryRepository>>,
    pub city_service: Arc<CityService<PgCityRepository, PgCountryRepository>>,
    pub freight_service: Arc<FreightService<PgFreightRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Wires the PostgreSQL repositories into their services.
    ///
    /// `signing_secret` keys the HMAC used to look up API tokens.
    pub fn new(pool: Arc<PgPool>, signing_secret: String) -> Self {
        let countries = Arc::new(PgCountryRepository::new(pool.clone()));
        let cities = Arc::new(PgCityRepository::new(pool.clone()));
        let freights = Arc::new(PgFreightRepository::new(pool.clone()));
        let tokens = Arc::new(PgTokenRepository::new(pool.clone()));

        Self {
            country_service: Arc::new(CountryService::new(countries.clone())),
            city_service: Arc::new(CityService::new(cities, countries)),
            freight_service: Arc::new(FreightService::new(freights)),
            auth_service: Arc::new(AuthService::new(tokens, signing_secret)),
            db: pool,
        }
    }
}
