//! Student repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};

use super::base;
use super::entities::{
    class,
    student::{self, ActiveModel, Entity as StudentEntity},
};
use crate::config::{default_avatar_url, DEFAULT_AVATAR_HINT};
use crate::domain::{NewStudent, Student};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[derive(Debug, FromQueryResult)]
struct StudentRow {
    id: String,
    name: String,
    class_id: String,
    class_name: Option<String>,
    avatar_url: String,
    avatar_hint: String,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student {
            id: row.id,
            name: row.name,
            class_id: row.class_id,
            class_name: row.class_name,
            avatar_url: row.avatar_url,
            avatar_hint: row.avatar_hint,
        }
    }
}

fn enriched() -> Select<StudentEntity> {
    StudentEntity::find()
        .select_only()
        .columns([
            student::Column::Id,
            student::Column::Name,
            student::Column::ClassId,
            student::Column::AvatarUrl,
            student::Column::AvatarHint,
        ])
        .column_as(class::Column::Name, "class_name")
        .join(JoinType::LeftJoin, student::Relation::Class.def())
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Students ordered by name, optionally restricted to one class
    async fn list(&self, class_id: Option<String>) -> AppResult<Vec<Student>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Student>>;

    async fn count(&self) -> AppResult<u64>;

    async fn create(&self, id: String, student: NewStudent) -> AppResult<()>;

    /// Absent avatar fields keep their stored values
    async fn update(&self, id: &str, student: NewStudent) -> AppResult<bool>;

    async fn delete(&self, id: &str) -> AppResult<bool>;
}

pub struct StudentStore {
    db: DatabaseConnection,
}

impl StudentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentRepository for StudentStore {
    async fn list(&self, class_id: Option<String>) -> AppResult<Vec<Student>> {
        let mut query = enriched();
        if let Some(class_id) = class_id {
            query = query.filter(student::Column::ClassId.eq(class_id));
        }

        let rows = query
            .order_by_asc(student::Column::Name)
            .into_model::<StudentRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Student>> {
        let row = enriched()
            .filter(student::Column::Id.eq(id))
            .into_model::<StudentRow>()
            .one(&self.db)
            .await?;

        Ok(row.map(Student::from))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(StudentEntity::find().count(&self.db).await?)
    }

    async fn create(&self, id: String, student: NewStudent) -> AppResult<()> {
        let active = ActiveModel {
            avatar_url: Set(student
                .avatar_url
                .unwrap_or_else(|| default_avatar_url(&id))),
            avatar_hint: Set(student
                .avatar_hint
                .unwrap_or_else(|| DEFAULT_AVATAR_HINT.to_string())),
            id: Set(id),
            name: Set(student.name),
            class_id: Set(student.class_id),
        };

        StudentEntity::insert(active)
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn update(&self, id: &str, student: NewStudent) -> AppResult<bool> {
        let Some(model) = StudentEntity::find_by_id(id.to_string()).one(&self.db).await? else {
            return Ok(false);
        };

        let mut active: ActiveModel = model.into();
        active.name = Set(student.name);
        active.class_id = Set(student.class_id);
        if let Some(url) = student.avatar_url {
            active.avatar_url = Set(url);
        }
        if let Some(hint) = student.avatar_hint {
            active.avatar_hint = Set(hint);
        }

        active.update(&self.db).await?;
        Ok(true)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        base::delete_by_id::<StudentEntity, _>(&self.db, id).await
    }
}
