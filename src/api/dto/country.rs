//! DTOs for the country resource.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::message::RETRIEVED_MESSAGE;
use crate::domain::entities::Country;

/// External shape of a country.
#[derive(Debug, Clone, Serialize)]
pub struct CountryResource {
    pub id: i64,
    pub country_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Country> for CountryResource {
    fn from(c: Country) -> Self {
        Self {
            id: c.id,
            country_name: c.country_name,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// `GET /api/countries` body.
#[derive(Debug, Serialize)]
pub struct CountryListResponse {
    pub countries: Vec<CountryResource>,
    pub message: &'static str,
}

impl CountryListResponse {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries: countries.into_iter().map(CountryResource::from).collect(),
            message: RETRIEVED_MESSAGE,
        }
    }
}

/// Single-country body returned by create and update.
#[derive(Debug, Serialize)]
pub struct CountryResponse {
    pub country: CountryResource,
}

impl From<Country> for CountryResponse {
    fn from(country: Country) -> Self {
        Self {
            country: country.into(),
        }
    }
}
