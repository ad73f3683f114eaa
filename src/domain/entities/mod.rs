//! Core domain entities.
//!
//! Entities are plain data structures mirroring stored rows. Each has a
//! separate `New*` struct carrying validated data for inserts and updates.
//!
//! # Entity Types
//!
//! - [`Country`] - A country, referenced by cities
//! - [`City`] - A city; [`CityWithCountry`] is its eager-loaded form
//! - [`Freight`] - A freight record

pub mod city;
pub mod country;
pub mod freight;

pub use city::{City, CityWithCountry, NewCity};
pub use country::{Country, NewCountry};
pub use freight::{Freight, NewFreight};
