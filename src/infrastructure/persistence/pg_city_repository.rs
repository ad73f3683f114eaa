//! PostgreSQL implementation of the city repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{City, CityWithCountry, Country, NewCity};
use crate::domain::repositories::CityRepository;
use crate::error::AppError;
use crate::utils::db_error;

/// Joined city + country row. Country columns are prefixed to avoid clashes.
struct CityCountryRow {
    id: i64,
    city_name: String,
    country_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    country_name: String,
    country_created_at: DateTime<Utc>,
    country_updated_at: DateTime<Utc>,
}

impl From<CityCountryRow> for CityWithCountry {
    fn from(r: CityCountryRow) -> Self {
        CityWithCountry {
            country: Country::new(
                r.country_id,
                r.country_name,
                r.country_created_at,
                r.country_updated_at,
            ),
            city: City::new(r.id, r.city_name, r.country_id, r.created_at, r.updated_at),
        }
    }
}

/// PostgreSQL repository for cities.
///
/// Eager loading is a single `JOIN` against `countries`.
pub struct PgCityRepository {
    pool: Arc<PgPool>,
}

impl PgCityRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for PgCityRepository {
    async fn list_with_country(&self) -> Result<Vec<CityWithCountry>, AppError> {
        let rows = sqlx::query_as!(
            CityCountryRow,
            r#"
            SELECT ci.id, ci.city_name, ci.country_id, ci.created_at, ci.updated_at,
                   co.country_name,
                   co.created_at AS "country_created_at!",
                   co.updated_at AS "country_updated_at!"
            FROM cities ci
            JOIN countries co ON co.id = ci.country_id
            ORDER BY ci.id
            "#
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(CityWithCountry::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<City>, AppError> {
        let row = sqlx::query_as!(
            City,
            r#"
            SELECT id, city_name, country_id, created_at, updated_at
            FROM cities
            WHERE id = $1
            "#,
            id
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_with_country(&self, id: i64) -> Result<Option<CityWithCountry>, AppError> {
        let row = sqlx::query_as!(
            CityCountryRow,
            r#"
            SELECT ci.id, ci.city_name, ci.country_id, ci.created_at, ci.updated_at,
                   co.country_name,
                   co.created_at AS "country_created_at!",
                   co.updated_at AS "country_updated_at!"
            FROM cities ci
            JOIN countries co ON co.id = ci.country_id
            WHERE ci.id = $1
            "#,
            id
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(CityWithCountry::from))
    }

    async fn name_taken(&self, city_name: &str, except_id: Option<i64>) -> Result<bool, AppError> {
        let taken = sqlx::query_scalar!(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM cities
                WHERE city_name = $1
                  AND ($2::BIGINT IS NULL OR id <> $2)
            ) AS "taken!"
            "#,
            city_name,
            except_id
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(taken)
    }

    async fn create(&self, new_city: NewCity) -> Result<City, AppError> {
        let row = sqlx::query_as!(
            City,
            r#"
            INSERT INTO cities (city_name, country_id)
            VALUES ($1, $2)
            RETURNING id, city_name, country_id, created_at, updated_at
            "#,
            new_city.city_name,
            new_city.country_id
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i64, update: NewCity) -> Result<City, AppError> {
        sqlx::query_as!(
            City,
            r#"
            UPDATE cities SET
                city_name  = $2,
                country_id = $3,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, city_name, country_id, created_at, updated_at
            "#,
            id,
            update.city_name,
            update.country_id
        )
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or(AppError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query!("DELETE FROM cities WHERE id = $1", id)
            .execute(self.pool.as_ref())
            .await
            .map_err(db_error::delete_error)?;

        Ok(result.rows_affected() > 0)
    }
}
