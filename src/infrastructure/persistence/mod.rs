//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Queries use the `sqlx` macros and are checked against the schema at compile time.
//!
//! # Repositories
//!
//! - [`PgCountryRepository`] - Countries
//! - [`PgCityRepository`] - Cities with eager-loaded countries
//! - [`PgFreightRepository`] - Freight records
//! - [`PgTokenRepository`] - API token storage and validation

pub mod pg_city_repository;
pub mod pg_country_repository;
pub mod pg_freight_repository;
pub mod pg_token_repository;

pub use pg_city_repository::PgCityRepository;
pub use pg_country_repository::PgCountryRepository;
pub use pg_freight_repository::PgFreightRepository;
pub use pg_token_repository::PgTokenRepository;
