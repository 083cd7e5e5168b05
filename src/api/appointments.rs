//! Appointment endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::appointment::{Appointment, AppointmentQuery, CreateAppointment, UpdateAppointmentStatus},
};

/// List appointments
#[utoipa::path(
    get,
    path = "/appointments",
    tag = "appointments",
    params(AppointmentQuery),
    responses(
        (status = 200, description = "Appointments ordered by start time", body = Vec<Appointment>)
    )
)]
pub async fn list_appointments(
    State(state): State<crate::AppState>,
    Query(query): Query<AppointmentQuery>,
) -> AppResult<Json<Vec<Appointment>>> {
    let appointments = state.services.appointments.list(&query).await?;
    Ok(Json(appointments))
}

/// Get appointment by ID
#[utoipa::path(
    get,
    path = "/appointments/{id}",
    tag = "appointments",
    params(("id" = Uuid, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment details", body = Appointment),
        (status = 404, description = "Appointment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_appointment(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.appointments.get_by_id(id).await?;
    Ok(Json(appointment))
}

/// Book an appointment
#[utoipa::path(
    post,
    path = "/appointments",
    tag = "appointments",
    request_body = CreateAppointment,
    responses(
        (status = 201, description = "Appointment booked", body = Appointment),
        (status = 400, description = "Invalid fields", body = crate::error::ErrorResponse),
        (status = 409, description = "Slot not available", body = crate::error::ErrorResponse),
        (status = 422, description = "Inactive or unqualified service/staff", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_appointment(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateAppointment>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    let appointment = state.services.appointments.create(&data).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Change appointment status
#[utoipa::path(
    put,
    path = "/appointments/{id}/status",
    tag = "appointments",
    params(("id" = Uuid, Path, description = "Appointment ID")),
    request_body = UpdateAppointmentStatus,
    responses(
        (status = 200, description = "Status updated", body = Appointment),
        (status = 404, description = "Appointment not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Transition not allowed", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_appointment_status(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateAppointmentStatus>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.appointments.update_status(id, data.status).await?;
    Ok(Json(appointment))
}
