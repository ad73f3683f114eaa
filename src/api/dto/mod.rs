//! Data Transfer Objects for API responses.
//!
//! Each resource DTO is a pure mapping from a stored entity to its JSON
//! shape; the envelopes wrap it for list and single-record responses.

pub mod city;
pub mod country;
pub mod freight;
pub mod health;
pub mod message;
