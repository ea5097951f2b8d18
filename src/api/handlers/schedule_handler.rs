//! Schedule handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{ListQuery, ValidatedJson};
use crate::api::AppState;
use crate::domain::schedule::{ScheduleCreated, ScheduleFilter, ScheduleList, ScheduleRequest};
use crate::domain::{NewSchedule, Schedule};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

pub fn schedule_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schedules).post(create_schedule))
        .route(
            "/:id",
            get(get_schedule).put(update_schedule).delete(delete_schedule),
        )
}

/// Weekly timetable, Monday first
#[utoipa::path(
    get,
    path = "/api/schedules",
    tag = "Schedules",
    params(ScheduleFilter),
    responses((status = 200, description = "Slots by weekday and start time", body = ScheduleList))
)]
pub async fn list_schedules(
    State(state): State<AppState>,
    ListQuery(filter): ListQuery<ScheduleFilter>,
) -> AppResult<Json<ScheduleList>> {
    let schedules = state
        .services
        .schedules()
        .list_schedules(filter.class_id, filter.teacher_id)
        .await?;
    Ok(Json(ScheduleList { schedules }))
}

#[utoipa::path(
    get,
    path = "/api/schedules/{id}",
    tag = "Schedules",
    params(("id" = String, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Slot found", body = Schedule),
        (status = 404, description = "Slot not found")
    )
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Schedule>> {
    let schedule = state.services.schedules().get_schedule(&id).await?;
    Ok(Json(schedule))
}

#[utoipa::path(
    post,
    path = "/api/schedules",
    tag = "Schedules",
    request_body = ScheduleRequest,
    responses(
        (status = 201, description = "Slot created", body = ScheduleCreated),
        (status = 400, description = "Invalid day or times, or staff member is not a teacher")
    )
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ScheduleRequest>,
) -> AppResult<Created<ScheduleCreated>> {
    let slot = NewSchedule::try_from(payload)?;
    let schedule_id = state.services.schedules().create_schedule(slot).await?;

    Ok(Created(ScheduleCreated {
        message: "Jadwal berhasil ditambahkan.".into(),
        schedule_id,
    }))
}

#[utoipa::path(
    put,
    path = "/api/schedules/{id}",
    tag = "Schedules",
    params(("id" = String, Path, description = "Schedule ID")),
    request_body = ScheduleRequest,
    responses(
        (status = 200, description = "Slot updated", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Slot not found")
    )
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ScheduleRequest>,
) -> AppResult<Json<MessageResponse>> {
    let slot = NewSchedule::try_from(payload)?;
    state.services.schedules().update_schedule(&id, slot).await?;
    Ok(Json(MessageResponse::new("Jadwal berhasil diperbarui.")))
}

#[utoipa::path(
    delete,
    path = "/api/schedules/{id}",
    tag = "Schedules",
    params(("id" = String, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Slot deleted", body = MessageResponse),
        (status = 404, description = "Slot not found")
    )
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.schedules().delete_schedule(&id).await?;
    Ok(Json(MessageResponse::new("Jadwal berhasil dihapus.")))
}
