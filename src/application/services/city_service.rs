//! City management service.

use std::sync::Arc;
use validator::Validate;

use crate::application::validation::{CityInput, FieldErrors, RawInput, messages};
use crate::domain::entities::{CityWithCountry, NewCity};
use crate::domain::repositories::{CityRepository, CountryRepository};
use crate::error::AppError;

/// Service for the city resource.
///
/// Every write re-validates both fields:
/// - `city_name` is required and unique, ignoring the row being updated
/// - `country` is required, an integer, and the id of an existing country
///
/// Results are returned with the referenced country loaded.
pub struct CityService<C: CityRepository, K: CountryRepository> {
    repository: Arc<C>,
    countries: Arc<K>,
}

impl<C: CityRepository, K: CountryRepository> CityService<C, K> {
    /// Creates a new city service.
    ///
    /// # Arguments
    ///
    /// - `repository` - city storage
    /// - `countries` - country storage used for the existence check
    pub fn new(repository: Arc<C>, countries: Arc<K>) -> Self {
        Self {
            repository,
            countries,
        }
    }

    /// Lists all cities with their countries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn list_cities(&self) -> Result<Vec<CityWithCountry>, AppError> {
        self.repository.list_with_country().await
    }

    /// Validates and stores a new city, returning it with its country.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn create_city(&self, raw: &RawInput) -> Result<CityWithCountry, AppError> {
        let new_city = self.validate(raw, None).await?;

        let city = self.repository.create(new_city).await?;
        tracing::info!(id = city.id, name = %city.city_name, country_id = city.country_id, "City created");

        self.reload(city.id).await
    }

    /// Validates and replaces an existing city, returning it with its country.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the city does not exist.
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn update_city(&self, id: i64, raw: &RawInput) -> Result<CityWithCountry, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        let update = self.validate(raw, Some(id)).await?;

        let city = self.repository.update(id, update).await?;
        tracing::info!(id, name = %city.city_name, country_id = city.country_id, "City updated");

        self.reload(city.id).await
    }

    /// Deletes a city.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the city does not exist.
    /// Returns [`AppError::DeleteFailed`] if the store rejects the delete.
    /// Returns [`AppError::Database`] on other database errors.
    pub async fn delete_city(&self, id: i64) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        match self.repository.delete(id).await {
            Ok(true) => {
                tracing::info!(id, "City deleted");
                Ok(())
            }
            Ok(false) => {
                tracing::warn!(id, "City vanished before delete");
                Err(AppError::DeleteFailed)
            }
            Err(AppError::DeleteFailed) => {
                tracing::warn!(id, "City delete rejected by the store");
                Err(AppError::DeleteFailed)
            }
            Err(e) => Err(e),
        }
    }

    /// Loads the given city together with its country.
    async fn reload(&self, id: i64) -> Result<CityWithCountry, AppError> {
        self.repository
            .find_with_country(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("city {id} missing right after write")))
    }

    /// Runs all city rules, collecting every failure.
    ///
    /// The existence check only runs once `country` passed the integer rule.
    async fn validate(&self, raw: &RawInput, except_id: Option<i64>) -> Result<NewCity, AppError> {
        let input = CityInput::from_raw(raw);
        let mut errors = input
            .validate()
            .err()
            .map(FieldErrors::from)
            .unwrap_or_default();

        if let Some(name) = &input.city_name
            && self.repository.name_taken(name, except_id).await?
        {
            errors.add("city_name", messages::taken("city_name"));
        }

        if let Some(country_id) = input.country_id()
            && !self.countries.exists(country_id).await?
        {
            errors.add("country", messages::invalid_selection("country"));
        }

        errors.into_result()?;

        let country_id = input.country_id();
        match (input.city_name, country_id) {
            (Some(city_name), Some(country_id)) => Ok(NewCity {
                city_name,
                country_id,
            }),
            _ => Err(AppError::internal("validated city with missing fields")),
        }
    }
}
