//! Report handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::extractors::ListQuery;
use crate::api::AppState;
use crate::domain::report::{AttendanceReport, DashboardSummary, ReportQuery};
use crate::errors::AppResult;

pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/attendance", get(attendance_report))
        .route("/summary", get(summary))
}

/// Monthly attendance of students, teachers and employees
#[utoipa::path(
    get,
    path = "/api/reports/attendance",
    tag = "Reports",
    params(ReportQuery),
    responses(
        (status = 200, description = "Records and totals for the month", body = AttendanceReport),
        (status = 400, description = "Month outside 1..=12")
    )
)]
pub async fn attendance_report(
    State(state): State<AppState>,
    ListQuery(query): ListQuery<ReportQuery>,
) -> AppResult<Json<AttendanceReport>> {
    let report = state.services.reports().attendance_report(query).await?;
    Ok(Json(report))
}

/// Dashboard counters
#[utoipa::path(
    get,
    path = "/api/reports/summary",
    tag = "Reports",
    responses((status = 200, description = "Current counters", body = DashboardSummary))
)]
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    let summary = state.services.reports().summary().await?;
    Ok(Json(summary))
}
