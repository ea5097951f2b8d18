//! Teaching journal handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use chrono::Utc;

use crate::api::extractors::{ListQuery, ValidatedJson};
use crate::api::AppState;
use crate::domain::journal::{JournalCreated, JournalFilter, JournalList, JournalRequest};
use crate::domain::Journal;
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

pub fn journal_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_journals).post(create_journal))
        .route("/:id", get(get_journal).delete(delete_journal))
}

#[utoipa::path(
    get,
    path = "/api/journals",
    tag = "Journals",
    params(JournalFilter),
    responses((status = 200, description = "Entries, newest date first", body = JournalList))
)]
pub async fn list_journals(
    State(state): State<AppState>,
    ListQuery(filter): ListQuery<JournalFilter>,
) -> AppResult<Json<JournalList>> {
    let journals = state
        .services
        .journals()
        .list_journals(filter.staff_id, filter.class_id)
        .await?;
    Ok(Json(JournalList { journals }))
}

#[utoipa::path(
    get,
    path = "/api/journals/{id}",
    tag = "Journals",
    params(("id" = String, Path, description = "Journal ID")),
    responses(
        (status = 200, description = "Entry found", body = Journal),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn get_journal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Journal>> {
    let journal = state.services.journals().get_journal(&id).await?;
    Ok(Json(journal))
}

/// Write a journal entry; the subject defaults to the teacher's own
#[utoipa::path(
    post,
    path = "/api/journals",
    tag = "Journals",
    request_body = JournalRequest,
    responses(
        (status = 201, description = "Entry created", body = JournalCreated),
        (status = 400, description = "Validation error or author is not a teacher"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn create_journal(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<JournalRequest>,
) -> AppResult<Created<JournalCreated>> {
    let journal = payload.into_new_journal(Utc::now().date_naive())?;
    let journal_id = state.services.journals().create_journal(journal).await?;

    Ok(Created(JournalCreated {
        message: "Jurnal mengajar berhasil disimpan.".into(),
        journal_id,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/journals/{id}",
    tag = "Journals",
    params(("id" = String, Path, description = "Journal ID")),
    responses(
        (status = 200, description = "Entry deleted", body = MessageResponse),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn delete_journal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.journals().delete_journal(&id).await?;
    Ok(Json(MessageResponse::new("Jurnal berhasil dihapus.")))
}
