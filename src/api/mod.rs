//! API handlers for the salon REST endpoints

pub mod appointments;
pub mod availability;
pub mod health;
pub mod openapi;
pub mod services;
pub mod staff;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Service catalog
        .route("/services", get(services::list_services).post(services::create_service))
        .route("/services/summary", get(services::services_summary))
        .route(
            "/services/:id",
            get(services::get_service)
                .put(services::update_service)
                .delete(services::delete_service),
        )
        .route("/services/:id/toggle-active", post(services::toggle_service))
        // Staff
        .route("/staff", get(staff::list_staff).post(staff::create_staff))
        .route(
            "/staff/:id",
            get(staff::get_staff).put(staff::update_staff).delete(staff::delete_staff),
        )
        .route("/staff/:id/schedule", put(staff::update_schedule))
        .route("/staff/:id/toggle-active", post(staff::toggle_staff))
        // Appointments
        .route(
            "/appointments",
            get(appointments::list_appointments).post(appointments::create_appointment),
        )
        .route("/appointments/:id", get(appointments::get_appointment))
        .route("/appointments/:id/status", put(appointments::update_appointment_status))
        // Availability
        .route("/availability/range", get(availability::selectable_range))
        .route("/availability/check", get(availability::check_slot))
        .route("/availability/slots", get(availability::day_slots))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new().nest("/api/v1", api_v1).merge(openapi)
}
