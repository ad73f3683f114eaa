//! Utility functions shared across layers.
//!
//! - [`db_error`] - Translation of constraint violations into field errors
//! - [`filename`] - File name normalization for stored uploads

pub mod db_error;
pub mod filename;
