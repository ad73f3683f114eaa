//! Repository trait for freight records.

use crate::domain::entities::{Freight, NewFreight};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for freight rows.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgFreightRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_freight.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FreightRepository: Send + Sync {
    /// Lists all freight records ordered by id.
    async fn list(&self) -> Result<Vec<Freight>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Freight>, AppError>;

    /// Returns true if another record already uses `freight_name`.
    async fn name_taken(&self, freight_name: &str, except_id: Option<i64>)
    -> Result<bool, AppError>;

    /// Returns true if another record already uses `freight_speditor_name`.
    async fn speditor_name_taken(
        &self,
        freight_speditor_name: &str,
        except_id: Option<i64>,
    ) -> Result<bool, AppError>;

    /// Inserts a new freight record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a unique constraint is violated.
    async fn create(&self, new_freight: NewFreight) -> Result<Freight, AppError>;

    /// Replaces the fields of an existing record and bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Validation`] if a unique constraint is violated.
    async fn update(&self, id: i64, update: NewFreight) -> Result<Freight, AppError>;

    /// Deletes a freight record. Returns `false` if no row was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DeleteFailed`] if the store rejects the delete.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
