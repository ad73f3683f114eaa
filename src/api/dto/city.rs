//! DTOs for the city resource.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::country::CountryResource;
use super::message::RETRIEVED_MESSAGE;
use crate::domain::entities::CityWithCountry;

/// External shape of a city. The referenced country is embedded in full
/// alongside `country_id`.
#[derive(Debug, Serialize)]
pub struct CityResource {
    pub id: i64,
    pub city_name: String,
    pub country_id: i64,
    pub country: CountryResource,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CityWithCountry> for CityResource {
    fn from(loaded: CityWithCountry) -> Self {
        let CityWithCountry { city, country } = loaded;
        Self {
            id: city.id,
            city_name: city.city_name,
            country_id: city.country_id,
            country: country.into(),
            created_at: city.created_at,
            updated_at: city.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CityListResponse {
    pub cities: Vec<CityResource>,
    pub message: &'static str,
}

impl CityListResponse {
    pub fn new(cities: Vec<CityWithCountry>) -> Self {
        Self {
            cities: cities.into_iter().map(CityResource::from).collect(),
            message: RETRIEVED_MESSAGE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CityResponse {
    pub city: CityResource,
}

impl From<CityWithCountry> for CityResponse {
    fn from(loaded: CityWithCountry) -> Self {
        Self {
            city: loaded.into(),
        }
    }
}
