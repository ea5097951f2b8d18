//! Legacy teacher handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::teacher::{TeacherCreated, TeacherList, TeacherRequest};
use crate::domain::{NewTeacher, Teacher};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

pub fn teacher_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teachers).post(create_teacher))
        .route(
            "/:id",
            get(get_teacher).put(update_teacher).delete(delete_teacher),
        )
}

#[utoipa::path(
    get,
    path = "/api/teachers",
    tag = "Teachers",
    responses((status = 200, description = "All legacy teachers", body = TeacherList))
)]
pub async fn list_teachers(State(state): State<AppState>) -> AppResult<Json<TeacherList>> {
    let teachers = state.services.teachers().list_teachers().await?;
    Ok(Json(TeacherList { teachers }))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    tag = "Teachers",
    params(("id" = String, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher found", body = Teacher),
        (status = 404, description = "Teacher not found")
    )
)]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Teacher>> {
    let teacher = state.services.teachers().get_teacher(&id).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    post,
    path = "/api/teachers",
    tag = "Teachers",
    request_body = TeacherRequest,
    responses(
        (status = 201, description = "Teacher created", body = TeacherCreated),
        (status = 400, description = "Name, NIP or subject missing")
    )
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TeacherRequest>,
) -> AppResult<Created<TeacherCreated>> {
    let teacher = NewTeacher::try_from(payload)?;
    let teacher_id = state.services.teachers().create_teacher(teacher).await?;

    Ok(Created(TeacherCreated {
        message: "Guru berhasil ditambahkan.".into(),
        teacher_id,
    }))
}

#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    tag = "Teachers",
    params(("id" = String, Path, description = "Teacher ID")),
    request_body = TeacherRequest,
    responses(
        (status = 200, description = "Teacher updated", body = MessageResponse),
        (status = 400, description = "Name, NIP or subject missing"),
        (status = 404, description = "Teacher not found")
    )
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<TeacherRequest>,
) -> AppResult<Json<MessageResponse>> {
    let teacher = NewTeacher::try_from(payload)?;
    state.services.teachers().update_teacher(&id, teacher).await?;
    Ok(Json(MessageResponse::new("Data guru berhasil diperbarui.")))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    tag = "Teachers",
    params(("id" = String, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher deleted", body = MessageResponse),
        (status = 404, description = "Teacher not found"),
        (status = 409, description = "Teacher still referenced")
    )
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.teachers().delete_teacher(&id).await?;
    Ok(Json(MessageResponse::new("Guru berhasil dihapus.")))
}
