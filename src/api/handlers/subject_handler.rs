//! Subject handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::subject::{SubjectCreated, SubjectList, SubjectRequest};
use crate::domain::Subject;
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

pub fn subject_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_subjects).post(create_subject))
        .route(
            "/:id",
            get(get_subject).put(update_subject).delete(delete_subject),
        )
}

#[utoipa::path(
    get,
    path = "/api/subjects",
    tag = "Subjects",
    responses((status = 200, description = "Subjects ordered by name", body = SubjectList))
)]
pub async fn list_subjects(State(state): State<AppState>) -> AppResult<Json<SubjectList>> {
    let subjects = state.services.subjects().list_subjects().await?;
    Ok(Json(SubjectList { subjects }))
}

#[utoipa::path(
    get,
    path = "/api/subjects/{id}",
    tag = "Subjects",
    params(("id" = String, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Subject found", body = Subject),
        (status = 404, description = "Subject not found")
    )
)]
pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Subject>> {
    let subject = state.services.subjects().get_subject(&id).await?;
    Ok(Json(subject))
}

#[utoipa::path(
    post,
    path = "/api/subjects",
    tag = "Subjects",
    request_body = SubjectRequest,
    responses(
        (status = 201, description = "Subject created", body = SubjectCreated),
        (status = 400, description = "Name missing or too short")
    )
)]
pub async fn create_subject(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SubjectRequest>,
) -> AppResult<Created<SubjectCreated>> {
    let subject_id = state
        .services
        .subjects()
        .create_subject(payload.into_name()?)
        .await?;

    Ok(Created(SubjectCreated {
        message: "Mata pelajaran berhasil ditambahkan.".into(),
        subject_id,
    }))
}

#[utoipa::path(
    put,
    path = "/api/subjects/{id}",
    tag = "Subjects",
    params(("id" = String, Path, description = "Subject ID")),
    request_body = SubjectRequest,
    responses(
        (status = 200, description = "Subject renamed", body = MessageResponse),
        (status = 404, description = "Subject not found")
    )
)]
pub async fn update_subject(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<SubjectRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .subjects()
        .update_subject(&id, payload.into_name()?)
        .await?;
    Ok(Json(MessageResponse::new("Mata pelajaran berhasil diperbarui.")))
}

#[utoipa::path(
    delete,
    path = "/api/subjects/{id}",
    tag = "Subjects",
    params(("id" = String, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Subject deleted", body = MessageResponse),
        (status = 404, description = "Subject not found"),
        (status = 409, description = "Subject still in use")
    )
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.subjects().delete_subject(&id).await?;
    Ok(Json(MessageResponse::new("Mata pelajaran berhasil dihapus.")))
}
