//! PostgreSQL implementation of the country repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Country, NewCountry};
use crate::domain::repositories::CountryRepository;
use crate::error::AppError;
use crate::utils::db_error;

/// PostgreSQL repository for countries.
///
/// Uniqueness of `country_name` is enforced by `countries_country_name_key`;
/// cities reference countries with `ON DELETE RESTRICT`.
pub struct PgCountryRepository {
    pool: Arc<PgPool>,
}

impl PgCountryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryRepository for PgCountryRepository {
    async fn list(&self) -> Result<Vec<Country>, AppError> {
        let rows = sqlx::query_as!(
            Country,
            r#"
            SELECT id, country_name, created_at, updated_at
            FROM countries
            ORDER BY id
            "#
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Country>, AppError> {
        let row = sqlx::query_as!(
            Country,
            r#"
            SELECT id, country_name, created_at, updated_at
            FROM countries
            WHERE id = $1
            "#,
            id
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar!(
            r#"SELECT EXISTS (SELECT 1 FROM countries WHERE id = $1) AS "exists!""#,
            id
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn name_taken(
        &self,
        country_name: &str,
        except_id: Option<i64>,
    ) -> Result<bool, AppError> {
        let taken = sqlx::query_scalar!(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM countries
                WHERE country_name = $1
                  AND ($2::BIGINT IS NULL OR id <> $2)
            ) AS "taken!"
            "#,
            country_name,
            except_id
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(taken)
    }

    async fn create(&self, new_country: NewCountry) -> Result<Country, AppError> {
        let row = sqlx::query_as!(
            Country,
            r#"
            INSERT INTO countries (country_name)
            VALUES ($1)
            RETURNING id, country_name, created_at, updated_at
            "#,
            new_country.country_name
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i64, update: NewCountry) -> Result<Country, AppError> {
        sqlx::query_as!(
            Country,
            r#"
            UPDATE countries SET
                country_name = $2,
                updated_at   = NOW()
            WHERE id = $1
            RETURNING id, country_name, created_at, updated_at
            "#,
            id,
            update.country_name
        )
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or(AppError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query!("DELETE FROM countries WHERE id = $1", id)
            .execute(self.pool.as_ref())
            .await
            .map_err(db_error::delete_error)?;

        Ok(result.rows_affected() > 0)
    }
}
