//! SunnyBooks Library Management System
//!
//! A Rust implementation of the SunnyBooks library management server,
//! providing a REST JSON API over books, copies, loans, reservations
//! and users, with per-book availability derived from copy statuses.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
