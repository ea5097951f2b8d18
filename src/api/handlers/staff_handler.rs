//! Staff handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::staff::{StaffCreated, StaffIntent, StaffList, StaffRequest};
use crate::domain::Staff;
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

pub fn staff_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_staff).post(create_staff))
        .route(
            "/:id",
            get(get_staff).put(update_staff).delete(delete_staff),
        )
}

/// List teachers and employees
#[utoipa::path(
    get,
    path = "/api/staff",
    tag = "Staff",
    responses(
        (status = 200, description = "All staff ordered by name", body = StaffList)
    )
)]
pub async fn list_staff(State(state): State<AppState>) -> AppResult<Json<StaffList>> {
    let staff = state.services.staff().list_staff().await?;
    Ok(Json(StaffList { staff }))
}

/// Get one staff member
#[utoipa::path(
    get,
    path = "/api/staff/{id}",
    tag = "Staff",
    params(("id" = String, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Staff member found", body = Staff),
        (status = 404, description = "Staff member not found")
    )
)]
pub async fn get_staff(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Staff>> {
    let staff = state.services.staff().get_staff(&id).await?;
    Ok(Json(staff))
}

/// Create a teacher or employee
#[utoipa::path(
    post,
    path = "/api/staff",
    tag = "Staff",
    request_body = StaffRequest,
    responses(
        (status = 201, description = "Staff member created", body = StaffCreated),
        (status = 400, description = "Role-dependent field missing")
    )
)]
pub async fn create_staff(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<StaffRequest>,
) -> AppResult<Created<StaffCreated>> {
    let staff = payload.into_new_staff(StaffIntent::Create)?;
    let staff_id = state.services.staff().create_staff(staff).await?;

    Ok(Created(StaffCreated {
        message: "Staf berhasil ditambahkan.".into(),
        staff_id,
    }))
}

/// Update a staff member and replace their class links
#[utoipa::path(
    put,
    path = "/api/staff/{id}",
    tag = "Staff",
    params(("id" = String, Path, description = "Staff ID")),
    request_body = StaffRequest,
    responses(
        (status = 200, description = "Staff member updated", body = MessageResponse),
        (status = 400, description = "Role-dependent field missing"),
        (status = 404, description = "Staff member not found")
    )
)]
pub async fn update_staff(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<StaffRequest>,
) -> AppResult<Json<MessageResponse>> {
    let staff = payload.into_new_staff(StaffIntent::Update)?;
    state.services.staff().update_staff(&id, staff).await?;
    Ok(Json(MessageResponse::new("Data staf berhasil diperbarui.")))
}

/// Delete a staff member with their class links and user account
#[utoipa::path(
    delete,
    path = "/api/staff/{id}",
    tag = "Staff",
    params(("id" = String, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Staff member deleted", body = MessageResponse),
        (status = 404, description = "Staff member not found"),
        (status = 409, description = "Journals or schedules still reference the staff member")
    )
)]
pub async fn delete_staff(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.staff().delete_staff(&id).await?;
    Ok(Json(MessageResponse::new("Staf berhasil dihapus.")))
}
