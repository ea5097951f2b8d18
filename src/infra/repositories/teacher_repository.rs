//! Legacy teacher repository: enriched reads.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use super::entities::{
    subject,
    teacher::{self, Entity as TeacherEntity},
};
use super::staff_repository::class_ids_aggregate;
use crate::domain::staff::split_class_ids;
use crate::domain::Teacher;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[derive(Debug, FromQueryResult)]
struct TeacherRow {
    id: String,
    name: String,
    nip: String,
    subject_id: String,
    subject_name: Option<String>,
    avatar_url: String,
    avatar_hint: String,
    class_ids: Option<String>,
}

impl From<TeacherRow> for Teacher {
    fn from(row: TeacherRow) -> Self {
        let mut taught_class_ids = split_class_ids(row.class_ids);
        taught_class_ids.sort();

        Teacher {
            id: row.id,
            name: row.name,
            nip: row.nip,
            subject_id: row.subject_id,
            subject_name: row.subject_name,
            avatar_url: row.avatar_url,
            avatar_hint: row.avatar_hint,
            taught_class_ids,
        }
    }
}

fn enriched(backend: DbBackend) -> Select<TeacherEntity> {
    TeacherEntity::find()
        .select_only()
        .columns([
            teacher::Column::Id,
            teacher::Column::Name,
            teacher::Column::Nip,
            teacher::Column::SubjectId,
            teacher::Column::AvatarUrl,
            teacher::Column::AvatarHint,
        ])
        .column_as(subject::Column::Name, "subject_name")
        .expr_as(
            Expr::cust(class_ids_aggregate(backend, "teacher_classes", "teacher_id", "teachers")),
            "class_ids",
        )
        .join(JoinType::LeftJoin, teacher::Relation::Subject.def())
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Teacher>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Teacher>>;
}

pub struct TeacherStore {
    db: DatabaseConnection,
}

impl TeacherStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeacherRepository for TeacherStore {
    async fn list(&self) -> AppResult<Vec<Teacher>> {
        let rows = enriched(self.db.get_database_backend())
            .order_by_asc(teacher::Column::Name)
            .into_model::<TeacherRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Teacher::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Teacher>> {
        let row = enriched(self.db.get_database_backend())
            .filter(teacher::Column::Id.eq(id))
            .into_model::<TeacherRow>()
            .one(&self.db)
            .await?;

        Ok(row.map(Teacher::from))
    }
}
