//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod cities;
pub mod countries;
pub mod freights;
pub mod health;

pub use cities::{create_city_handler, delete_city_handler, list_cities_handler, update_city_handler};
pub use countries::{
    create_country_handler, delete_country_handler, list_countries_handler,
    update_country_handler,
};
pub use freights::{
    create_freight_handler, delete_freight_handler, list_freights_handler,
    update_freight_handler,
};
pub use health::health_handler;
