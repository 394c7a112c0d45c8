//! Cookbook Server
//!
//! REST backend for a personal recipe collection:
//! - Recipe CRUD with tags stored by reference
//! - Title/tag search with signed sort keys
//! - Offset paging behind opaque base64 cursors
//! - Explicit CORS preflight handling for the web client

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
