//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and shapes the
//! results into resource JSON.
//!
//! # Modules
//!
//! - [`dto`] - Resource and envelope types for responses
//! - [`extractors`] - Raw JSON body extraction
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, rate limiting and tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
