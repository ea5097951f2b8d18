//! Subject repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::base;
use super::entities::subject::{self, ActiveModel, Entity as SubjectEntity};
use crate::domain::Subject;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Subject repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    /// All subjects ordered by name
    async fn list(&self) -> AppResult<Vec<Subject>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Subject>>;

    async fn create(&self, id: String, name: String) -> AppResult<()>;

    /// Rename a subject; `false` when it does not exist
    async fn update(&self, id: &str, name: String) -> AppResult<bool>;

    async fn delete(&self, id: &str) -> AppResult<bool>;
}

pub struct SubjectStore {
    db: DatabaseConnection,
}

impl SubjectStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubjectRepository for SubjectStore {
    async fn list(&self) -> AppResult<Vec<Subject>> {
        let models = SubjectEntity::find()
            .order_by_asc(subject::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Subject::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Subject>> {
        let model = SubjectEntity::find_by_id(id.to_string()).one(&self.db).await?;
        Ok(model.map(Subject::from))
    }

    async fn create(&self, id: String, name: String) -> AppResult<()> {
        let active = ActiveModel {
            id: Set(id),
            name: Set(name),
        };
        SubjectEntity::insert(active)
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn update(&self, id: &str, name: String) -> AppResult<bool> {
        let Some(model) = SubjectEntity::find_by_id(id.to_string()).one(&self.db).await? else {
            return Ok(false);
        };

        let mut active: ActiveModel = model.into();
        active.name = Set(name);
        active.update(&self.db).await?;
        Ok(true)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        base::delete_by_id::<SubjectEntity, _>(&self.db, id).await
    }
}
