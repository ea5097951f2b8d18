//! Student handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{ListQuery, ValidatedJson};
use crate::api::AppState;
use crate::domain::student::{StudentCreated, StudentFilter, StudentList, StudentRequest};
use crate::domain::{NewStudent, Student};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
}

#[utoipa::path(
    get,
    path = "/api/students",
    tag = "Students",
    params(StudentFilter),
    responses((status = 200, description = "Students ordered by name", body = StudentList))
)]
pub async fn list_students(
    State(state): State<AppState>,
    ListQuery(filter): ListQuery<StudentFilter>,
) -> AppResult<Json<StudentList>> {
    let students = state.services.students().list_students(filter.class_id).await?;
    Ok(Json(StudentList { students }))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = "Students",
    params(("id" = String, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student found", body = Student),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Student>> {
    let student = state.services.students().get_student(&id).await?;
    Ok(Json(student))
}

#[utoipa::path(
    post,
    path = "/api/students",
    tag = "Students",
    request_body = StudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentCreated),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<StudentRequest>,
) -> AppResult<Created<StudentCreated>> {
    let student = NewStudent::try_from(payload)?;
    let student_id = state.services.students().create_student(student).await?;

    Ok(Created(StudentCreated {
        message: "Siswa berhasil ditambahkan.".into(),
        student_id,
    }))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = "Students",
    params(("id" = String, Path, description = "Student ID")),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student updated", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<StudentRequest>,
) -> AppResult<Json<MessageResponse>> {
    let student = NewStudent::try_from(payload)?;
    state.services.students().update_student(&id, student).await?;
    Ok(Json(MessageResponse::new("Data siswa berhasil diperbarui.")))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = "Students",
    params(("id" = String, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 404, description = "Student not found"),
        (status = 409, description = "Attendance records still reference the student")
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.students().delete_student(&id).await?;
    Ok(Json(MessageResponse::new("Siswa berhasil dihapus.")))
}
