//! Domain layer containing business entities and repository contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define the contracts implemented by
//! [`crate::infrastructure`]; business rules live in
//! [`crate::application::services`].
//!
//! - [`entities`] - Country, City and Freight data structures
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
