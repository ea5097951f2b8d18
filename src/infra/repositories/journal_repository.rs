//! Teaching journal repository.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select, Set,
};

use super::base;
use super::entities::{
    class,
    journal::{self, ActiveModel, Entity as JournalEntity},
    subject,
};
use crate::domain::{Journal, NewJournal};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[derive(Debug, FromQueryResult)]
struct JournalRow {
    id: String,
    staff_id: String,
    class_id: String,
    class_name: Option<String>,
    subject_id: String,
    subject_name: Option<String>,
    date: chrono::NaiveDate,
    topic: String,
    notes: String,
    material_file: Option<String>,
}

impl From<JournalRow> for Journal {
    fn from(row: JournalRow) -> Self {
        Journal {
            id: row.id,
            staff_id: row.staff_id,
            class_id: row.class_id,
            class_name: row.class_name,
            subject_id: row.subject_id,
            subject_name: row.subject_name,
            date: row.date,
            topic: row.topic,
            notes: row.notes,
            material_file: row.material_file,
        }
    }
}

fn enriched() -> Select<JournalEntity> {
    JournalEntity::find()
        .select_only()
        .columns([
            journal::Column::Id,
            journal::Column::StaffId,
            journal::Column::ClassId,
            journal::Column::SubjectId,
            journal::Column::Date,
            journal::Column::Topic,
            journal::Column::Notes,
            journal::Column::MaterialFile,
        ])
        .column_as(class::Column::Name, "class_name")
        .column_as(subject::Column::Name, "subject_name")
        .join(JoinType::LeftJoin, journal::Relation::Class.def())
        .join(JoinType::LeftJoin, journal::Relation::Subject.def())
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait JournalRepository: Send + Sync {
    /// Newest date first
    async fn list(
        &self,
        staff_id: Option<String>,
        class_id: Option<String>,
    ) -> AppResult<Vec<Journal>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Journal>>;

    /// `subject_id` is the resolved subject, never empty
    async fn create(&self, id: String, subject_id: String, journal: NewJournal) -> AppResult<()>;

    async fn delete(&self, id: &str) -> AppResult<bool>;
}

pub struct JournalStore {
    db: DatabaseConnection,
}

impl JournalStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JournalRepository for JournalStore {
    async fn list(
        &self,
        staff_id: Option<String>,
        class_id: Option<String>,
    ) -> AppResult<Vec<Journal>> {
        let mut query = enriched();
        if let Some(staff_id) = staff_id {
            query = query.filter(journal::Column::StaffId.eq(staff_id));
        }
        if let Some(class_id) = class_id {
            query = query.filter(journal::Column::ClassId.eq(class_id));
        }

        let rows = query
            .order_by_desc(journal::Column::Date)
            .into_model::<JournalRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Journal::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Journal>> {
        let row = enriched()
            .filter(journal::Column::Id.eq(id))
            .into_model::<JournalRow>()
            .one(&self.db)
            .await?;

        Ok(row.map(Journal::from))
    }

    async fn create(&self, id: String, subject_id: String, journal: NewJournal) -> AppResult<()> {
        let active = ActiveModel {
            id: Set(id),
            staff_id: Set(journal.staff_id),
            class_id: Set(journal.class_id),
            subject_id: Set(subject_id),
            date: Set(journal.date),
            topic: Set(journal.topic),
            notes: Set(journal.notes),
            material_file: Set(journal.material_file),
        };

        JournalEntity::insert(active)
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        base::delete_by_id::<JournalEntity, _>(&self.db, id).await
    }
}
