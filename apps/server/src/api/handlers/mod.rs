//! Request handlers for API endpoints
//!
//! Handlers coordinate between routes and services, handling:
//! - Request extraction and validation
//! - Service invocation
//! - Response formatting

pub mod cors;
pub mod metrics;
pub mod misc;
pub mod recipes;
pub mod users;
