//! Freight management service.

use std::sync::Arc;
use validator::Validate;

use crate::application::validation::{FieldErrors, FreightInput, RawInput, messages};
use crate::domain::entities::{Freight, NewFreight};
use crate::domain::repositories::FreightRepository;
use crate::error::AppError;

/// Service for the freight resource.
///
/// - `freight_name` and `freight_speditor_name` are required and unique,
///   ignoring the row being updated
/// - `freight_weights` is required and otherwise free-form
pub struct FreightService<R: FreightRepository> {
    repository: Arc<R>,
}

impl<R: FreightRepository> FreightService<R> {
    /// Creates a new freight service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all freight records.
    pub async fn list_freights(&self) -> Result<Vec<Freight>, AppError> {
        self.repository.list().await
    }

    /// Validates and stores a new freight record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn create_freight(&self, raw: &RawInput) -> Result<Freight, AppError> {
        let new_freight = self.validate(raw, None).await?;

        let freight = self.repository.create(new_freight).await?;
        tracing::info!(id = freight.id, name = %freight.freight_name, "Freight created");

        Ok(freight)
    }

    /// Validates and replaces an existing freight record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn update_freight(&self, id: i64, raw: &RawInput) -> Result<Freight, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        let update = self.validate(raw, Some(id)).await?;

        let freight = self.repository.update(id, update).await?;
        tracing::info!(id, name = %freight.freight_name, "Freight updated");

        Ok(freight)
    }

    /// Deletes a freight record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::DeleteFailed`] if the store rejects the delete.
    /// Returns [`AppError::Database`] on other database errors.
    pub async fn delete_freight(&self, id: i64) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        match self.repository.delete(id).await {
            Ok(true) => {
                tracing::info!(id, "Freight deleted");
                Ok(())
            }
            Ok(false) => {
                tracing::warn!(id, "Freight vanished before delete");
                Err(AppError::DeleteFailed)
            }
            Err(AppError::DeleteFailed) => {
                tracing::warn!(id, "Freight delete rejected by the store");
                Err(AppError::DeleteFailed)
            }
            Err(e) => Err(e),
        }
    }

    async fn validate(&self, raw: &RawInput, except_id: Option<i64>) -> Result<NewFreight, AppError> {
        let input = FreightInput::from_raw(raw);
        let mut errors = input
            .validate()
            .err()
            .map(FieldErrors::from)
            .unwrap_or_default();

        if let Some(name) = &input.freight_name
            && self.repository.name_taken(name, except_id).await?
        {
            errors.add("freight_name", messages::taken("freight_name"));
        }

        if let Some(speditor) = &input.freight_speditor_name
            && self
                .repository
                .speditor_name_taken(speditor, except_id)
                .await?
        {
            errors.add(
                "freight_speditor_name",
                messages::taken("freight_speditor_name"),
            );
        }

        errors.into_result()?;

        match (
            input.freight_name,
            input.freight_speditor_name,
            input.freight_weights,
        ) {
            (Some(freight_name), Some(freight_speditor_name), Some(freight_weights)) => {
                Ok(NewFreight {
                    freight_name,
                    freight_speditor_name,
                    freight_weights,
                })
            }
            _ => Err(AppError::internal("validated freight with missing fields")),
        }
    }
}
