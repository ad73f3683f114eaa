//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CountryRepository`] - Country rows
//! - [`CityRepository`] - City rows with eager-loaded countries
//! - [`FreightRepository`] - Freight rows
//! - [`TokenRepository`] - API token verification
//! - [`FileStorage`] - Binary file storage for image uploads

pub mod city_repository;
pub mod country_repository;
pub mod file_storage;
pub mod freight_repository;
pub mod token_repository;

pub use city_repository::CityRepository;
pub use country_repository::CountryRepository;
pub use file_storage::{FileStorage, StorageError};
pub use freight_repository::FreightRepository;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use city_repository::MockCityRepository;
#[cfg(test)]
pub use country_repository::MockCountryRepository;
#[cfg(test)]
pub use file_storage::MockFileStorage;
#[cfg(test)]
pub use freight_repository::MockFreightRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
