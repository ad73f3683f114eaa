//! Business logic services for the application layer.

pub mod auth_service;
pub mod city_service;
pub mod country_service;
pub mod freight_service;
pub mod image_service;

pub use auth_service::AuthService;
pub use city_service::CityService;
pub use country_service::CountryService;
pub use freight_service::FreightService;
pub use image_service::{ImageError, ImageService, ImageUpload};
