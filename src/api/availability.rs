//! Availability endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::availability::{
        RangeQuery, RangeResponse, SlotCheckQuery, SlotCheckResponse, SlotsQuery, SlotsResponse,
    },
};

/// Earliest and latest start time for a service on a date
#[utoipa::path(
    get,
    path = "/availability/range",
    tag = "availability",
    params(RangeQuery),
    responses(
        (status = 200, description = "Selectable range", body = RangeResponse),
        (status = 404, description = "Service not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn selectable_range(
    State(state): State<crate::AppState>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<RangeResponse>> {
    let range = state
        .services
        .availability
        .selectable_range(query.date, query.service_id)
        .await?;
    Ok(Json(range))
}

/// Check a single candidate start
#[utoipa::path(
    get,
    path = "/availability/check",
    tag = "availability",
    params(SlotCheckQuery),
    responses(
        (status = 200, description = "Slot decision", body = SlotCheckResponse),
        (status = 404, description = "Service or staff member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn check_slot(
    State(state): State<crate::AppState>,
    Query(query): Query<SlotCheckQuery>,
) -> AppResult<Json<SlotCheckResponse>> {
    let decision = state
        .services
        .availability
        .check(query.start_time, query.service_id, query.staff_id)
        .await?;
    Ok(Json(decision))
}

/// Slot grid for a day
#[utoipa::path(
    get,
    path = "/availability/slots",
    tag = "availability",
    params(SlotsQuery),
    responses(
        (status = 200, description = "Candidate starts with availability", body = SlotsResponse),
        (status = 404, description = "Service or staff member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn day_slots(
    State(state): State<crate::AppState>,
    Query(query): Query<SlotsQuery>,
) -> AppResult<Json<SlotsResponse>> {
    let slots = state
        .services
        .availability
        .slots(query.date, query.service_id, query.staff_id)
        .await?;
    Ok(Json(slots))
}
