//! Attendance handlers for students and staff.

use axum::{extract::State, response::Json, routing::get, Router};
use chrono::Utc;

use crate::api::extractors::{ListQuery, ValidatedJson};
use crate::api::AppState;
use crate::domain::attendance::{
    AttendanceCreated, AttendanceFilter, AttendanceList, RecordAttendanceRequest,
    RecordStaffAttendanceRequest, StaffAttendanceFilter, StaffAttendanceList,
};
use crate::errors::AppResult;
use crate::types::Created;

pub fn attendance_routes() -> Router<AppState> {
    Router::new().route("/", get(list_attendance).post(record_attendance))
}

pub fn staff_attendance_routes() -> Router<AppState> {
    Router::new().route("/", get(list_staff_attendance).post(record_staff_attendance))
}

/// Student attendance, newest first
#[utoipa::path(
    get,
    path = "/api/attendance",
    tag = "Attendance",
    params(AttendanceFilter),
    responses((status = 200, description = "Matching records", body = AttendanceList))
)]
pub async fn list_attendance(
    State(state): State<AppState>,
    ListQuery(filter): ListQuery<AttendanceFilter>,
) -> AppResult<Json<AttendanceList>> {
    let records = state
        .services
        .attendance()
        .list_student_records(filter.into_criteria())
        .await?;
    Ok(Json(AttendanceList { records }))
}

/// Record a student's attendance
#[utoipa::path(
    post,
    path = "/api/attendance",
    tag = "Attendance",
    request_body = RecordAttendanceRequest,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceCreated),
        (status = 400, description = "Student or status missing"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn record_attendance(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RecordAttendanceRequest>,
) -> AppResult<Created<AttendanceCreated>> {
    let record = payload.into_new_attendance(Utc::now())?;
    let record_id = state.services.attendance().record_student(record).await?;

    Ok(Created(AttendanceCreated {
        message: "Absensi berhasil dicatat.".into(),
        record_id,
    }))
}

/// Staff attendance, newest first
#[utoipa::path(
    get,
    path = "/api/staff-attendance",
    tag = "Attendance",
    params(StaffAttendanceFilter),
    responses((status = 200, description = "Matching records", body = StaffAttendanceList))
)]
pub async fn list_staff_attendance(
    State(state): State<AppState>,
    ListQuery(filter): ListQuery<StaffAttendanceFilter>,
) -> AppResult<Json<StaffAttendanceList>> {
    let records = state
        .services
        .attendance()
        .list_staff_records(filter.window(), filter.role)
        .await?;
    Ok(Json(StaffAttendanceList { records }))
}

/// Record a staff member's attendance
#[utoipa::path(
    post,
    path = "/api/staff-attendance",
    tag = "Attendance",
    request_body = RecordStaffAttendanceRequest,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceCreated),
        (status = 400, description = "Staff member or status missing"),
        (status = 404, description = "Staff member not found")
    )
)]
pub async fn record_staff_attendance(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RecordStaffAttendanceRequest>,
) -> AppResult<Created<AttendanceCreated>> {
    let record = payload.into_new_attendance(Utc::now())?;
    let record_id = state.services.attendance().record_staff(record).await?;

    Ok(Created(AttendanceCreated {
        message: "Absensi staf berhasil dicatat.".into(),
        record_id,
    }))
}
