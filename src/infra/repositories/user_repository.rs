//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::base::{self, decode};
use super::entities::user::{self, ActiveModel, Entity as UserEntity, Model};
use crate::domain::{NewUser, User, UserChanges, UserRole};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> AppResult<Self> {
        Ok(User {
            role: decode(&model.role, UserRole::parse, "users.role")?,
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            staff_id: model.staff_id,
            teacher_id: model.teacher_id,
            created_at: model.created_at,
        })
    }
}

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All accounts ordered by email
    async fn list(&self) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn create(&self, id: String, user: NewUser) -> AppResult<()>;

    /// Apply changes; `false` when the account does not exist
    async fn update(&self, id: &str, changes: UserChanges) -> AppResult<bool>;

    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        UserEntity::find()
            .order_by_asc(user::Column::Email)
            .all(&self.db)
            .await?
            .into_iter()
            .map(User::try_from)
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        UserEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn create(&self, id: String, user: NewUser) -> AppResult<()> {
        let active = ActiveModel {
            id: Set(id),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            role: Set(user.role.as_str().to_string()),
            staff_id: Set(user.staff_id),
            teacher_id: Set(user.teacher_id),
            created_at: Set(chrono::Utc::now()),
        };

        UserEntity::insert(active)
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn update(&self, id: &str, changes: UserChanges) -> AppResult<bool> {
        let Some(model) = UserEntity::find_by_id(id.to_string()).one(&self.db).await? else {
            return Ok(false);
        };

        let mut active: ActiveModel = model.into();
        active.email = Set(changes.email);
        active.role = Set(changes.role.as_str().to_string());
        active.staff_id = Set(changes.staff_id);
        active.teacher_id = Set(changes.teacher_id);
        if let Some(hash) = changes.password_hash {
            active.password_hash = Set(hash);
        }

        active.update(&self.db).await?;
        Ok(true)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        base::delete_by_id::<UserEntity, _>(&self.db, id).await
    }
}
