//! Admission (PPDB) handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, put},
    Router,
};

use crate::api::extractors::{ListQuery, ValidatedJson};
use crate::api::AppState;
use crate::domain::admission::{
    AdmissionCreated, AdmissionFilter, AdmissionList, AdmissionRequest, AdmissionStatusRequest,
};
use crate::domain::{Admission, NewAdmission};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

pub fn admission_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_admissions).post(register_admission))
        .route("/:id", get(get_admission).delete(delete_admission))
        .route("/:id/status", put(update_admission_status))
}

#[utoipa::path(
    get,
    path = "/api/admissions",
    tag = "Admissions",
    params(AdmissionFilter),
    responses((status = 200, description = "Applications, newest first", body = AdmissionList))
)]
pub async fn list_admissions(
    State(state): State<AppState>,
    ListQuery(filter): ListQuery<AdmissionFilter>,
) -> AppResult<Json<AdmissionList>> {
    let admissions = state
        .services
        .admissions()
        .list_admissions(filter.status)
        .await?;
    Ok(Json(AdmissionList { admissions }))
}

#[utoipa::path(
    get,
    path = "/api/admissions/{id}",
    tag = "Admissions",
    params(("id" = String, Path, description = "Admission ID")),
    responses(
        (status = 200, description = "Application found", body = Admission),
        (status = 404, description = "Application not found")
    )
)]
pub async fn get_admission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Admission>> {
    let admission = state.services.admissions().get_admission(&id).await?;
    Ok(Json(admission))
}

/// Submit a registration form
#[utoipa::path(
    post,
    path = "/api/admissions",
    tag = "Admissions",
    request_body = AdmissionRequest,
    responses(
        (status = 201, description = "Applicant registered as Pending", body = AdmissionCreated),
        (status = 400, description = "Validation error")
    )
)]
pub async fn register_admission(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AdmissionRequest>,
) -> AppResult<Created<AdmissionCreated>> {
    let admission = NewAdmission::try_from(payload)?;
    let admission_id = state.services.admissions().register(admission).await?;

    Ok(Created(AdmissionCreated {
        message: "Pendaftaran berhasil dikirim.".into(),
        admission_id,
    }))
}

/// Accept, reject or reset an application
#[utoipa::path(
    put,
    path = "/api/admissions/{id}/status",
    tag = "Admissions",
    params(("id" = String, Path, description = "Admission ID")),
    request_body = AdmissionStatusRequest,
    responses(
        (status = 200, description = "Status changed", body = MessageResponse),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Application not found")
    )
)]
pub async fn update_admission_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<AdmissionStatusRequest>,
) -> AppResult<Json<MessageResponse>> {
    let status = payload.into_status()?;
    state.services.admissions().set_status(&id, status).await?;
    Ok(Json(MessageResponse::new("Status pendaftaran berhasil diperbarui.")))
}

#[utoipa::path(
    delete,
    path = "/api/admissions/{id}",
    tag = "Admissions",
    params(("id" = String, Path, description = "Admission ID")),
    responses(
        (status = 200, description = "Application deleted", body = MessageResponse),
        (status = 404, description = "Application not found")
    )
)]
pub async fn delete_admission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.admissions().delete_admission(&id).await?;
    Ok(Json(MessageResponse::new("Data pendaftaran berhasil dihapus.")))
}
