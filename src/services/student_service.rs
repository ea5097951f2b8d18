//! Student service - Enrolment records.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{EntityId, NewStudent, Student};
use crate::errors::{AppError, AppResult, OptionExt, ReferenceExt};
use crate::infra::UnitOfWork;

const STUDENT_NOT_FOUND: &str = "Siswa tidak ditemukan.";
const UNKNOWN_CLASS: &str = "Kelas tidak ditemukan.";
const STUDENT_IN_USE: &str = "Gagal menghapus siswa karena masih ada data absensi yang terkait.";

#[async_trait]
pub trait StudentService: Send + Sync {
    /// Students ordered by name, optionally of one class
    async fn list_students(&self, class_id: Option<String>) -> AppResult<Vec<Student>>;

    async fn get_student(&self, id: &str) -> AppResult<Student>;

    async fn create_student(&self, student: NewStudent) -> AppResult<String>;

    async fn update_student(&self, id: &str, student: NewStudent) -> AppResult<()>;

    async fn delete_student(&self, id: &str) -> AppResult<()>;
}

pub struct StudentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> StudentManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> StudentService for StudentManager<U> {
    async fn list_students(&self, class_id: Option<String>) -> AppResult<Vec<Student>> {
        self.uow.students().list(class_id).await
    }

    async fn get_student(&self, id: &str) -> AppResult<Student> {
        self.uow
            .students()
            .find_by_id(id)
            .await?
            .ok_or_not_found(STUDENT_NOT_FOUND)
    }

    async fn create_student(&self, student: NewStudent) -> AppResult<String> {
        let id = EntityId::Student.generate();
        self.uow
            .students()
            .create(id.clone(), student)
            .await
            .or_unknown_reference(UNKNOWN_CLASS)?;

        tracing::info!(student_id = %id, "student created");
        Ok(id)
    }

    async fn update_student(&self, id: &str, student: NewStudent) -> AppResult<()> {
        let updated = self
            .uow
            .students()
            .update(id, student)
            .await
            .or_unknown_reference(UNKNOWN_CLASS)?;

        if !updated {
            return Err(AppError::not_found(STUDENT_NOT_FOUND));
        }
        Ok(())
    }

    async fn delete_student(&self, id: &str) -> AppResult<()> {
        let deleted = self
            .uow
            .students()
            .delete(id)
            .await
            .or_referenced(STUDENT_IN_USE)?;

        if !deleted {
            return Err(AppError::not_found(STUDENT_NOT_FOUND));
        }
        Ok(())
    }
}
