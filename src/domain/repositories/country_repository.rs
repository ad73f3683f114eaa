//! Repository trait for countries.

use crate::domain::entities::{Country, NewCountry};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for country rows.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCountryRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_country.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Lists all countries ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn list(&self) -> Result<Vec<Country>, AppError>;

    /// Finds a country by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Country>, AppError>;

    /// Returns true if a country with the given ID exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;

    /// Returns true if another country already uses `country_name`.
    ///
    /// # Arguments
    ///
    /// - `country_name` - Name to look for (exact match)
    /// - `except_id` - Row ignored by the check (the one being updated)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn name_taken(&self, country_name: &str, except_id: Option<i64>)
    -> Result<bool, AppError>;

    /// Inserts a new country.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name violates the unique constraint.
    /// Returns [`AppError::Database`] on other database errors.
    async fn create(&self, new_country: NewCountry) -> Result<Country, AppError>;

    /// Replaces the fields of an existing country and bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the country does not exist.
    /// Returns [`AppError::Validation`] if the name violates the unique constraint.
    /// Returns [`AppError::Database`] on other database errors.
    async fn update(&self, id: i64, update: NewCountry) -> Result<Country, AppError>;

    /// Deletes a country.
    ///
    /// Returns `false` if no row was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DeleteFailed`] if the store rejects the delete,
    /// e.g. while cities still reference the country.
    /// Returns [`AppError::Database`] on other database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
