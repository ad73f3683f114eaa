//! Application layer: request validation and service orchestration.
//!
//! Services consume repository traits and give HTTP handlers (and the admin
//! CLI) a narrow API.
//!
//! # Available Services
//!
//! - [`services::country_service::CountryService`] - Country CRUD
//! - [`services::city_service::CityService`] - City CRUD with country lookups
//! - [`services::freight_service::FreightService`] - Freight CRUD
//! - [`services::auth_service::AuthService`] - API token authentication
//! - [`services::image_service::ImageService`] - Image and thumbnail ingestion

pub mod services;
pub mod validation;
