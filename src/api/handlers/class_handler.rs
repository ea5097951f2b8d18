//! Class handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::class::{ClassCreated, ClassList, ClassRequest};
use crate::domain::Class;
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

/// Create class routes
pub fn class_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_classes).post(create_class))
        .route(
            "/:id",
            get(get_class).put(update_class).delete(delete_class),
        )
}

/// List classes with homeroom teacher and student count
#[utoipa::path(
    get,
    path = "/api/classes",
    tag = "Classes",
    responses(
        (status = 200, description = "All classes ordered by name", body = ClassList)
    )
)]
pub async fn list_classes(State(state): State<AppState>) -> AppResult<Json<ClassList>> {
    let classes = state.services.classes().list_classes().await?;
    Ok(Json(ClassList { classes }))
}

/// Get one class
#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    tag = "Classes",
    params(("id" = String, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Class found", body = Class),
        (status = 404, description = "Class not found")
    )
)]
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Class>> {
    let class = state.services.classes().get_class(&id).await?;
    Ok(Json(class))
}

/// Create a class with the next sequential ID
#[utoipa::path(
    post,
    path = "/api/classes",
    tag = "Classes",
    request_body = ClassRequest,
    responses(
        (status = 201, description = "Class created", body = ClassCreated),
        (status = 400, description = "Name or homeroom teacher missing")
    )
)]
pub async fn create_class(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ClassRequest>,
) -> AppResult<Created<ClassCreated>> {
    let class = payload.into_new_class()?;
    let class_id = state.services.classes().create_class(class).await?;

    Ok(Created(ClassCreated {
        message: "Kelas berhasil dibuat.".into(),
        class_id,
    }))
}

/// Update a class
#[utoipa::path(
    put,
    path = "/api/classes/{id}",
    tag = "Classes",
    params(("id" = String, Path, description = "Class ID")),
    request_body = ClassRequest,
    responses(
        (status = 200, description = "Class updated", body = MessageResponse),
        (status = 400, description = "Name missing"),
        (status = 404, description = "Class not found")
    )
)]
pub async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ClassRequest>,
) -> AppResult<Json<MessageResponse>> {
    let class = payload.into_class_changes()?;
    state.services.classes().update_class(&id, class).await?;
    Ok(Json(MessageResponse::new("Data kelas berhasil diperbarui.")))
}

/// Delete a class
#[utoipa::path(
    delete,
    path = "/api/classes/{id}",
    tag = "Classes",
    params(("id" = String, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Class deleted", body = MessageResponse),
        (status = 404, description = "Class not found"),
        (status = 409, description = "Class still referenced")
    )
)]
pub async fn delete_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.classes().delete_class(&id).await?;
    Ok(Json(MessageResponse::new("Kelas berhasil dihapus.")))
}
