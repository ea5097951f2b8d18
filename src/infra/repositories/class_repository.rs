//! Class repository: enriched reads and single-row writes.
//!
//! New classes are inserted through the unit of work because their
//! sequential IDs must be allocated inside a serializable transaction.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    Select, Set,
};

use super::base;
use super::entities::{
    class::{self, ActiveModel, Entity as ClassEntity},
    staff,
};
use crate::domain::{Class, NewClass};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const STUDENT_COUNT_SQL: &str =
    "(SELECT COUNT(*) FROM students WHERE students.class_id = classes.id)";

#[derive(Debug, FromQueryResult)]
struct ClassRow {
    id: String,
    name: String,
    walikelas_id: Option<String>,
    walikelas_name: Option<String>,
    student_count: i64,
}

impl From<ClassRow> for Class {
    fn from(row: ClassRow) -> Self {
        Class {
            id: row.id,
            name: row.name,
            walikelas_id: row.walikelas_id,
            walikelas_name: row.walikelas_name,
            student_count: row.student_count,
        }
    }
}

/// Classes joined with homeroom name and enrolment count.
fn enriched() -> Select<ClassEntity> {
    ClassEntity::find()
        .select_only()
        .columns([class::Column::Id, class::Column::Name, class::Column::WalikelasId])
        .column_as(staff::Column::Name, "walikelas_name")
        .expr_as(Expr::cust(STUDENT_COUNT_SQL), "student_count")
        .join(JoinType::LeftJoin, class::Relation::Walikelas.def())
}

/// Class repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ClassRepository: Send + Sync {
    /// All classes ordered by name
    async fn list(&self) -> AppResult<Vec<Class>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Class>>;

    async fn count(&self) -> AppResult<u64>;

    /// Overwrite name and homeroom; `false` when the class does not exist
    async fn update(&self, id: &str, class: NewClass) -> AppResult<bool>;

    async fn delete(&self, id: &str) -> AppResult<bool>;
}

pub struct ClassStore {
    db: DatabaseConnection,
}

impl ClassStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClassRepository for ClassStore {
    async fn list(&self) -> AppResult<Vec<Class>> {
        let rows = enriched()
            .order_by_asc(class::Column::Name)
            .into_model::<ClassRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Class::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Class>> {
        let row = enriched()
            .filter(class::Column::Id.eq(id))
            .into_model::<ClassRow>()
            .one(&self.db)
            .await?;

        Ok(row.map(Class::from))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(ClassEntity::find().count(&self.db).await?)
    }

    async fn update(&self, id: &str, class: NewClass) -> AppResult<bool> {
        let Some(model) = ClassEntity::find_by_id(id.to_string()).one(&self.db).await? else {
            return Ok(false);
        };

        let mut active: ActiveModel = model.into();
        active.name = Set(class.name);
        active.walikelas_id = Set(class.walikelas_id);
        active.update(&self.db).await?;
        Ok(true)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        base::delete_by_id::<ClassEntity, _>(&self.db, id).await
    }
}
