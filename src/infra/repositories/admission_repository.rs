//! Admission application repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::base::{self, decode};
use super::entities::admission::{self, ActiveModel, Entity as AdmissionEntity, Model};
use crate::domain::{Admission, AdmissionStatus, Gender, NewAdmission};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

impl TryFrom<Model> for Admission {
    type Error = AppError;

    fn try_from(model: Model) -> AppResult<Self> {
        Ok(Admission {
            status: decode(&model.status, AdmissionStatus::parse, "admissions.status")?,
            gender: decode(&model.gender, Gender::parse, "admissions.gender")?,
            id: model.id,
            name: model.name,
            previous_school: model.previous_school,
            registration_date: model.registration_date,
            parent_name: model.parent_name,
            contact: model.contact,
            birth_place: model.birth_place,
            birth_date: model.birth_date,
            address: model.address,
            academic_year: model.academic_year,
        })
    }
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AdmissionRepository: Send + Sync {
    /// Newest registration first
    async fn list(&self, status: Option<AdmissionStatus>) -> AppResult<Vec<Admission>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Admission>>;

    async fn count_by_status(&self, status: AdmissionStatus) -> AppResult<u64>;

    /// Store a new `Pending` application
    async fn create(
        &self,
        id: String,
        admission: NewAdmission,
        registered_at: DateTime<Utc>,
    ) -> AppResult<()>;

    async fn update_status(&self, id: &str, status: AdmissionStatus) -> AppResult<bool>;

    async fn delete(&self, id: &str) -> AppResult<bool>;
}

pub struct AdmissionStore {
    db: DatabaseConnection,
}

impl AdmissionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdmissionRepository for AdmissionStore {
    async fn list(&self, status: Option<AdmissionStatus>) -> AppResult<Vec<Admission>> {
        let mut query = AdmissionEntity::find();
        if let Some(status) = status {
            query = query.filter(admission::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_desc(admission::Column::RegistrationDate)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Admission::try_from)
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Admission>> {
        AdmissionEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .map(Admission::try_from)
            .transpose()
    }

    async fn count_by_status(&self, status: AdmissionStatus) -> AppResult<u64> {
        Ok(AdmissionEntity::find()
            .filter(admission::Column::Status.eq(status.as_str()))
            .count(&self.db)
            .await?)
    }

    async fn create(
        &self,
        id: String,
        admission: NewAdmission,
        registered_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let active = ActiveModel {
            id: Set(id),
            name: Set(admission.name),
            previous_school: Set(admission.previous_school),
            registration_date: Set(registered_at),
            status: Set(AdmissionStatus::Pending.as_str().to_string()),
            parent_name: Set(admission.parent_name),
            contact: Set(admission.contact),
            birth_place: Set(admission.birth_place),
            birth_date: Set(admission.birth_date),
            gender: Set(admission.gender.as_str().to_string()),
            address: Set(admission.address),
            academic_year: Set(admission.academic_year),
        };

        AdmissionEntity::insert(active)
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn update_status(&self, id: &str, status: AdmissionStatus) -> AppResult<bool> {
        let Some(model) = AdmissionEntity::find_by_id(id.to_string()).one(&self.db).await? else {
            return Ok(false);
        };

        let mut active: ActiveModel = model.into();
        active.status = Set(status.as_str().to_string());
        active.update(&self.db).await?;
        Ok(true)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        base::delete_by_id::<AdmissionEntity, _>(&self.db, id).await
    }
}
