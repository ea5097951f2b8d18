//! Schedule repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};

use super::base::{self, decode};
use super::entities::{
    class,
    schedule::{self, ActiveModel, Entity as ScheduleEntity},
    staff, subject,
};
use crate::domain::schedule::sort_week;
use crate::domain::{NewSchedule, Schedule, Weekday};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[derive(Debug, FromQueryResult)]
struct ScheduleRow {
    id: String,
    class_id: String,
    class_name: Option<String>,
    subject_id: String,
    subject_name: Option<String>,
    teacher_id: String,
    teacher_name: Option<String>,
    day: String,
    start_time: String,
    end_time: String,
}

impl TryFrom<ScheduleRow> for Schedule {
    type Error = AppError;

    fn try_from(row: ScheduleRow) -> AppResult<Self> {
        Ok(Schedule {
            day: decode(&row.day, Weekday::parse, "schedules.day")?,
            id: row.id,
            class_id: row.class_id,
            class_name: row.class_name,
            subject_id: row.subject_id,
            subject_name: row.subject_name,
            teacher_id: row.teacher_id,
            teacher_name: row.teacher_name,
            start_time: row.start_time,
            end_time: row.end_time,
        })
    }
}

fn enriched() -> Select<ScheduleEntity> {
    ScheduleEntity::find()
        .select_only()
        .columns([
            schedule::Column::Id,
            schedule::Column::ClassId,
            schedule::Column::SubjectId,
            schedule::Column::TeacherId,
            schedule::Column::Day,
            schedule::Column::StartTime,
            schedule::Column::EndTime,
        ])
        .column_as(class::Column::Name, "class_name")
        .column_as(subject::Column::Name, "subject_name")
        .column_as(staff::Column::Name, "teacher_name")
        .join(JoinType::LeftJoin, schedule::Relation::Class.def())
        .join(JoinType::LeftJoin, schedule::Relation::Subject.def())
        .join(JoinType::LeftJoin, schedule::Relation::Teacher.def())
}

fn active_model(id: String, slot: &NewSchedule) -> ActiveModel {
    ActiveModel {
        id: Set(id),
        class_id: Set(slot.class_id.clone()),
        subject_id: Set(slot.subject_id.clone()),
        teacher_id: Set(slot.teacher_id.clone()),
        day: Set(slot.day.as_str().to_string()),
        start_time: Set(slot.start_text()),
        end_time: Set(slot.end_text()),
    }
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Slots ordered by weekday then start time
    async fn list(
        &self,
        class_id: Option<String>,
        teacher_id: Option<String>,
    ) -> AppResult<Vec<Schedule>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Schedule>>;

    async fn create(&self, id: String, slot: NewSchedule) -> AppResult<()>;

    async fn update(&self, id: &str, slot: NewSchedule) -> AppResult<bool>;

    async fn delete(&self, id: &str) -> AppResult<bool>;
}

pub struct ScheduleStore {
    db: DatabaseConnection,
}

impl ScheduleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScheduleRepository for ScheduleStore {
    async fn list(
        &self,
        class_id: Option<String>,
        teacher_id: Option<String>,
    ) -> AppResult<Vec<Schedule>> {
        let mut query = enriched();
        if let Some(class_id) = class_id {
            query = query.filter(schedule::Column::ClassId.eq(class_id));
        }
        if let Some(teacher_id) = teacher_id {
            query = query.filter(schedule::Column::TeacherId.eq(teacher_id));
        }

        let mut schedules = query
            .order_by_asc(schedule::Column::StartTime)
            .into_model::<ScheduleRow>()
            .all(&self.db)
            .await?
            .into_iter()
            .map(Schedule::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        // Day names don't sort chronologically in SQL.
        sort_week(&mut schedules);
        Ok(schedules)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Schedule>> {
        enriched()
            .filter(schedule::Column::Id.eq(id))
            .into_model::<ScheduleRow>()
            .one(&self.db)
            .await?
            .map(Schedule::try_from)
            .transpose()
    }

    async fn create(&self, id: String, slot: NewSchedule) -> AppResult<()> {
        ScheduleEntity::insert(active_model(id, &slot))
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn update(&self, id: &str, slot: NewSchedule) -> AppResult<bool> {
        if !base::exists::<ScheduleEntity, _>(&self.db, id).await? {
            return Ok(false);
        }

        active_model(id.to_string(), &slot).update(&self.db).await?;
        Ok(true)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        base::delete_by_id::<ScheduleEntity, _>(&self.db, id).await
    }
}
