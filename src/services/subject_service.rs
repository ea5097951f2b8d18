//! Subject service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{EntityId, Subject};
use crate::errors::{AppError, AppResult, OptionExt, ReferenceExt};
use crate::infra::UnitOfWork;

const SUBJECT_NOT_FOUND: &str = "Mata pelajaran tidak ditemukan.";
const SUBJECT_IN_USE: &str =
    "Gagal menghapus mata pelajaran karena masih digunakan oleh guru, jadwal, atau jurnal.";

#[async_trait]
pub trait SubjectService: Send + Sync {
    async fn list_subjects(&self) -> AppResult<Vec<Subject>>;

    async fn get_subject(&self, id: &str) -> AppResult<Subject>;

    async fn create_subject(&self, name: String) -> AppResult<String>;

    async fn update_subject(&self, id: &str, name: String) -> AppResult<()>;

    async fn delete_subject(&self, id: &str) -> AppResult<()>;
}

pub struct SubjectManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> SubjectManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> SubjectService for SubjectManager<U> {
    async fn list_subjects(&self) -> AppResult<Vec<Subject>> {
        self.uow.subjects().list().await
    }

    async fn get_subject(&self, id: &str) -> AppResult<Subject> {
        self.uow
            .subjects()
            .find_by_id(id)
            .await?
            .ok_or_not_found(SUBJECT_NOT_FOUND)
    }

    async fn create_subject(&self, name: String) -> AppResult<String> {
        let id = EntityId::Subject.generate();
        self.uow.subjects().create(id.clone(), name).await?;
        Ok(id)
    }

    async fn update_subject(&self, id: &str, name: String) -> AppResult<()> {
        if !self.uow.subjects().update(id, name).await? {
            return Err(AppError::not_found(SUBJECT_NOT_FOUND));
        }
        Ok(())
    }

    async fn delete_subject(&self, id: &str) -> AppResult<()> {
        let deleted = self
            .uow
            .subjects()
            .delete(id)
            .await
            .or_referenced(SUBJECT_IN_USE)?;

        if !deleted {
            return Err(AppError::not_found(SUBJECT_NOT_FOUND));
        }
        Ok(())
    }
}
