//! PostgreSQL implementation of the freight repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Freight, NewFreight};
use crate::domain::repositories::FreightRepository;
use crate::error::AppError;
use crate::utils::db_error;

/// PostgreSQL repository for freight records.
pub struct PgFreightRepository {
    pool: Arc<PgPool>,
}

impl PgFreightRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FreightRepository for PgFreightRepository {
    async fn list(&self) -> Result<Vec<Freight>, AppError> {
        let rows = sqlx::query_as!(
            Freight,
            r#"
            SELECT id, freight_name, freight_speditor_name, freight_weights, created_at, updated_at
            FROM freights
            ORDER BY id
            "#
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Freight>, AppError> {
        let row = sqlx::query_as!(
            Freight,
            r#"
            SELECT id, freight_name, freight_speditor_name, freight_weights, created_at, updated_at
            FROM freights
            WHERE id = $1
            "#,
            id
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn name_taken(
        &self,
        freight_name: &str,
        except_id: Option<i64>,
    ) -> Result<bool, AppError> {
        let taken = sqlx::query_scalar!(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM freights
                WHERE freight_name = $1
                  AND ($2::BIGINT IS NULL OR id <> $2)
            ) AS "taken!"
            "#,
            freight_name,
            except_id
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(taken)
    }

    async fn speditor_name_taken(
        &self,
        freight_speditor_name: &str,
        except_id: Option<i64>,
    ) -> Result<bool, AppError> {
        let taken = sqlx::query_scalar!(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM freights
                WHERE freight_speditor_name = $1
                  AND ($2::BIGINT IS NULL OR id <> $2)
            ) AS "taken!"
            "#,
            freight_speditor_name,
            except_id
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(taken)
    }

    async fn create(&self, new_freight: NewFreight) -> Result<Freight, AppError> {
        let row = sqlx::query_as!(
            Freight,
            r#"
            INSERT INTO freights (freight_name, freight_speditor_name, freight_weights)
            VALUES ($1, $2, $3)
            RETURNING id, freight_name, freight_speditor_name, freight_weights, created_at, updated_at
            "#,
            new_freight.freight_name,
            new_freight.freight_speditor_name,
            new_freight.freight_weights
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i64, update: NewFreight) -> Result<Freight, AppError> {
        sqlx::query_as!(
            Freight,
            r#"
            UPDATE freights SET
                freight_name          = $2,
                freight_speditor_name = $3,
                freight_weights       = $4,
                updated_at            = NOW()
            WHERE id = $1
            RETURNING id, freight_name, freight_speditor_name, freight_weights, created_at, updated_at
            "#,
            id,
            update.freight_name,
            update.freight_speditor_name,
            update.freight_weights
        )
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or(AppError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query!("DELETE FROM freights WHERE id = $1", id)
            .execute(self.pool.as_ref())
            .await
            .map_err(db_error::delete_error)?;

        Ok(result.rows_affected() > 0)
    }
}
