//! Admission service - New student registrations and their review.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::domain::{Admission, AdmissionStatus, EntityId, NewAdmission};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

const ADMISSION_NOT_FOUND: &str = "Data pendaftaran tidak ditemukan.";

#[async_trait]
pub trait AdmissionService: Send + Sync {
    /// Newest registration first
    async fn list_admissions(&self, status: Option<AdmissionStatus>) -> AppResult<Vec<Admission>>;

    async fn get_admission(&self, id: &str) -> AppResult<Admission>;

    /// Register an applicant as `Pending`
    async fn register(&self, admission: NewAdmission) -> AppResult<String>;

    async fn set_status(&self, id: &str, status: AdmissionStatus) -> AppResult<()>;

    async fn delete_admission(&self, id: &str) -> AppResult<()>;
}

pub struct AdmissionManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AdmissionManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AdmissionService for AdmissionManager<U> {
    async fn list_admissions(&self, status: Option<AdmissionStatus>) -> AppResult<Vec<Admission>> {
        self.uow.admissions().list(status).await
    }

    async fn get_admission(&self, id: &str) -> AppResult<Admission> {
        self.uow
            .admissions()
            .find_by_id(id)
            .await?
            .ok_or_not_found(ADMISSION_NOT_FOUND)
    }

    async fn register(&self, admission: NewAdmission) -> AppResult<String> {
        let id = EntityId::Admission.generate();
        self.uow
            .admissions()
            .create(id.clone(), admission, Utc::now())
            .await?;

        tracing::info!(admission_id = %id, "applicant registered");
        Ok(id)
    }

    async fn set_status(&self, id: &str, status: AdmissionStatus) -> AppResult<()> {
        if !self.uow.admissions().update_status(id, status).await? {
            return Err(AppError::not_found(ADMISSION_NOT_FOUND));
        }
        tracing::info!(admission_id = %id, status = status.as_str(), "admission reviewed");
        Ok(())
    }

    async fn delete_admission(&self, id: &str) -> AppResult<()> {
        if !self.uow.admissions().delete(id).await? {
            return Err(AppError::not_found(ADMISSION_NOT_FOUND));
        }
        Ok(())
    }
}
