//! Country management service.

use std::sync::Arc;
use validator::Validate;

use crate::application::validation::{CountryInput, FieldErrors, RawInput, messages};
use crate::domain::entities::{Country, NewCountry};
use crate::domain::repositories::CountryRepository;
use crate::error::AppError;

/// Service for the country resource.
///
/// Runs validation → persistence for every write:
/// - `country_name` is required
/// - `country_name` is unique, ignoring the row being updated
pub struct CountryService<R: CountryRepository> {
    repository: Arc<R>,
}

impl<R: CountryRepository> CountryService<R> {
    /// Creates a new country service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all countries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn list_countries(&self) -> Result<Vec<Country>, AppError> {
        self.repository.list().await
    }

    /// Validates and stores a new country.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn create_country(&self, raw: &RawInput) -> Result<Country, AppError> {
        let new_country = self.validate(raw, None).await?;

        let country = self.repository.create(new_country).await?;
        tracing::info!(id = country.id, name = %country.country_name, "Country created");

        Ok(country)
    }

    /// Validates and replaces an existing country.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the country does not exist.
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn update_country(&self, id: i64, raw: &RawInput) -> Result<Country, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        let update = self.validate(raw, Some(id)).await?;

        let country = self.repository.update(id, update).await?;
        tracing::info!(id, name = %country.country_name, "Country updated");

        Ok(country)
    }

    /// Deletes a country.
    ///
    /// No check for referencing cities is made here; the store restricts such
    /// deletes and the repository reports the rejection as [`AppError::DeleteFailed`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the country does not exist.
    /// Returns [`AppError::DeleteFailed`] if the store rejects the delete.
    /// Returns [`AppError::Database`] on other database errors.
    pub async fn delete_country(&self, id: i64) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        match self.repository.delete(id).await {
            Ok(true) => {
                tracing::info!(id, "Country deleted");
                Ok(())
            }
            Ok(false) => {
                tracing::warn!(id, "Country vanished before delete");
                Err(AppError::DeleteFailed)
            }
            Err(AppError::DeleteFailed) => {
                tracing::warn!(id, "Country delete rejected by the store");
                Err(AppError::DeleteFailed)
            }
            Err(e) => Err(e),
        }
    }

    /// Runs all country rules, collecting every failure.
    async fn validate(&self, raw: &RawInput, except_id: Option<i64>) -> Result<NewCountry, AppError> {
        let input = CountryInput::from_raw(raw);
        let mut errors = input
            .validate()
            .err()
            .map(FieldErrors::from)
            .unwrap_or_default();

        if let Some(name) = &input.country_name
            && self.repository.name_taken(name, except_id).await?
        {
            errors.add("country_name", messages::taken("country_name"));
        }

        errors.into_result()?;

        match input.country_name {
            Some(country_name) => Ok(NewCountry { country_name }),
            None => Err(AppError::internal("validated country without a name")),
        }
    }
}
