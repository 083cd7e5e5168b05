//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{appointments, availability, health, services, staff};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Salon API",
        version = "1.0.0",
        description = "Salon services, staff and appointment booking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Services
        services::list_services,
        services::services_summary,
        services::get_service,
        services::create_service,
        services::update_service,
        services::toggle_service,
        services::delete_service,
        // Staff
        staff::list_staff,
        staff::get_staff,
        staff::create_staff,
        staff::update_staff,
        staff::update_schedule,
        staff::toggle_staff,
        staff::delete_staff,
        // Appointments
        appointments::list_appointments,
        appointments::get_appointment,
        appointments::create_appointment,
        appointments::update_appointment_status,
        // Availability
        availability::selectable_range,
        availability::check_slot,
        availability::day_slots,
    ),
    components(
        schemas(
            // Services
            crate::models::service::Service,
            crate::models::service::CreateService,
            crate::models::service::UpdateService,
            crate::models::service::ServiceSortField,
            crate::models::service::SortDirection,
            crate::models::service::ServiceSummary,
            crate::models::enums::ServiceCategory,
            // Staff
            crate::models::staff::StaffMember,
            crate::models::staff::CreateStaff,
            crate::models::staff::UpdateStaff,
            crate::models::staff::UpdateSchedule,
            crate::models::staff::WorkingHours,
            crate::models::staff::WorkingHoursInput,
            crate::models::enums::StaffRole,
            // Appointments
            crate::models::appointment::Appointment,
            crate::models::appointment::CreateAppointment,
            crate::models::appointment::UpdateAppointmentStatus,
            crate::models::enums::AppointmentStatus,
            // Availability
            crate::models::availability::RangeResponse,
            crate::models::availability::SlotCheckResponse,
            crate::models::availability::SlotsResponse,
            crate::scheduling::Interval,
            crate::scheduling::BusinessHours,
            crate::scheduling::TimeSlot,
            // Health
            health::HealthResponse,
            health::ReadinessResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::FieldViolation,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "services", description = "Service catalog management"),
        (name = "staff", description = "Staff and working hours"),
        (name = "appointments", description = "Appointment booking and lifecycle"),
        (name = "availability", description = "Selectable ranges and slot checks")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
