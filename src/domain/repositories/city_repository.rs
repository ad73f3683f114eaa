//! Repository trait for cities.

use crate::domain::entities::{City, CityWithCountry, NewCity};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for city rows.
///
/// Read methods returning [`CityWithCountry`] load the referenced country in
/// the same query.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCityRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_city.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    /// Lists all cities with their countries, ordered by city id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn list_with_country(&self) -> Result<Vec<CityWithCountry>, AppError>;

    /// Finds a city by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<City>, AppError>;

    /// Finds a city by its database ID together with its country.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_with_country(&self, id: i64) -> Result<Option<CityWithCountry>, AppError>;

    /// Returns true if another city already uses `city_name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn name_taken(&self, city_name: &str, except_id: Option<i64>) -> Result<bool, AppError>;

    /// Inserts a new city.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on unique or country reference violations.
    /// Returns [`AppError::Database`] on other database errors.
    async fn create(&self, new_city: NewCity) -> Result<City, AppError>;

    /// Replaces the fields of an existing city and bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the city does not exist.
    /// Returns [`AppError::Validation`] on unique or country reference violations.
    /// Returns [`AppError::Database`] on other database errors.
    async fn update(&self, id: i64, update: NewCity) -> Result<City, AppError>;

    /// Deletes a city. Returns `false` if no row was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DeleteFailed`] if the store rejects the delete.
    /// Returns [`AppError::Database`] on other database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
