//! Salon appointment server
//!
//! A Rust REST API for a salon: service catalog, staff with weekly working
//! hours, and appointment booking guarded by an availability engine that
//! refuses out-of-hours and overlapping slots.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod scheduling;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build services over `repository` using the scheduling section of `config`
    pub fn new(config: AppConfig, repository: repository::Repository) -> Self {
        let services = services::Services::new(repository, config.scheduling.clone());
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
