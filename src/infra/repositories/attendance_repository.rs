//! Student and staff attendance logs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::base::decode;
use super::entities::{
    attendance::{self, Entity as AttendanceEntity},
    class, staff,
    staff_attendance::{self, Entity as StaffAttendanceEntity},
    student,
};
use crate::domain::attendance::{
    AttendanceCriteria, NewAttendance, NewStaffAttendance, TimeWindow,
};
use crate::domain::{AttendanceRecord, AttendanceStatus, StaffAttendanceRecord, StaffRole};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[derive(Debug, FromQueryResult)]
struct AttendanceRow {
    id: String,
    student_id: String,
    student_name: Option<String>,
    class_id: Option<String>,
    class_name: Option<String>,
    status: String,
    timestamp: DateTime<Utc>,
    recorded_by: Option<String>,
}

impl TryFrom<AttendanceRow> for AttendanceRecord {
    type Error = AppError;

    fn try_from(row: AttendanceRow) -> AppResult<Self> {
        Ok(AttendanceRecord {
            status: decode(&row.status, AttendanceStatus::parse, "attendance_records.status")?,
            id: row.id,
            student_id: row.student_id,
            student_name: row.student_name,
            class_id: row.class_id,
            class_name: row.class_name,
            timestamp: row.timestamp,
            recorded_by: row.recorded_by,
        })
    }
}

#[derive(Debug, FromQueryResult)]
struct StaffAttendanceRow {
    id: String,
    staff_id: String,
    staff_name: Option<String>,
    role: Option<String>,
    status: String,
    timestamp: DateTime<Utc>,
}

impl TryFrom<StaffAttendanceRow> for StaffAttendanceRecord {
    type Error = AppError;

    fn try_from(row: StaffAttendanceRow) -> AppResult<Self> {
        Ok(StaffAttendanceRecord {
            status: decode(&row.status, AttendanceStatus::parse, "staff_attendance_records.status")?,
            role: row
                .role
                .as_deref()
                .map(|role| decode(role, StaffRole::parse, "staff.role"))
                .transpose()?,
            id: row.id,
            staff_id: row.staff_id,
            staff_name: row.staff_name,
            timestamp: row.timestamp,
        })
    }
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    async fn record(&self, id: String, record: NewAttendance) -> AppResult<()>;

    /// Newest first
    async fn list(&self, criteria: AttendanceCriteria) -> AppResult<Vec<AttendanceRecord>>;

    async fn record_staff(&self, id: String, record: NewStaffAttendance) -> AppResult<()>;

    /// Newest first
    async fn list_staff(
        &self,
        window: TimeWindow,
        role: Option<StaffRole>,
    ) -> AppResult<Vec<StaffAttendanceRecord>>;
}

pub struct AttendanceStore {
    db: DatabaseConnection,
}

impl AttendanceStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AttendanceRepository for AttendanceStore {
    async fn record(&self, id: String, record: NewAttendance) -> AppResult<()> {
        let active = attendance::ActiveModel {
            id: Set(id),
            student_id: Set(record.student_id),
            status: Set(record.status.as_str().to_string()),
            timestamp: Set(record.timestamp),
            recorded_by: Set(record.recorded_by),
        };

        AttendanceEntity::insert(active)
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn list(&self, criteria: AttendanceCriteria) -> AppResult<Vec<AttendanceRecord>> {
        let mut query = AttendanceEntity::find()
            .select_only()
            .columns([
                attendance::Column::Id,
                attendance::Column::StudentId,
                attendance::Column::Status,
                attendance::Column::Timestamp,
                attendance::Column::RecordedBy,
            ])
            .column_as(student::Column::Name, "student_name")
            .column_as(student::Column::ClassId, "class_id")
            .column_as(class::Column::Name, "class_name")
            .join(JoinType::LeftJoin, attendance::Relation::Student.def())
            .join(JoinType::LeftJoin, student::Relation::Class.def());

        if let Some(from) = criteria.window.from {
            query = query.filter(attendance::Column::Timestamp.gte(from));
        }
        if let Some(to) = criteria.window.to {
            query = query.filter(attendance::Column::Timestamp.lt(to));
        }
        if let Some(class_id) = criteria.class_id {
            query = query.filter(student::Column::ClassId.eq(class_id));
        }
        if let Some(student_id) = criteria.student_id {
            query = query.filter(attendance::Column::StudentId.eq(student_id));
        }

        query
            .order_by_desc(attendance::Column::Timestamp)
            .into_model::<AttendanceRow>()
            .all(&self.db)
            .await?
            .into_iter()
            .map(AttendanceRecord::try_from)
            .collect()
    }

    async fn record_staff(&self, id: String, record: NewStaffAttendance) -> AppResult<()> {
        let active = staff_attendance::ActiveModel {
            id: Set(id),
            staff_id: Set(record.staff_id),
            status: Set(record.status.as_str().to_string()),
            timestamp: Set(record.timestamp),
        };

        StaffAttendanceEntity::insert(active)
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn list_staff(
        &self,
        window: TimeWindow,
        role: Option<StaffRole>,
    ) -> AppResult<Vec<StaffAttendanceRecord>> {
        let mut query = StaffAttendanceEntity::find()
            .select_only()
            .columns([
                staff_attendance::Column::Id,
                staff_attendance::Column::StaffId,
                staff_attendance::Column::Status,
                staff_attendance::Column::Timestamp,
            ])
            .column_as(staff::Column::Name, "staff_name")
            .column_as(staff::Column::Role, "role")
            .join(JoinType::LeftJoin, staff_attendance::Relation::Staff.def());

        if let Some(from) = window.from {
            query = query.filter(staff_attendance::Column::Timestamp.gte(from));
        }
        if let Some(to) = window.to {
            query = query.filter(staff_attendance::Column::Timestamp.lt(to));
        }
        if let Some(role) = role {
            query = query.filter(staff::Column::Role.eq(role.as_str()));
        }

        query
            .order_by_desc(staff_attendance::Column::Timestamp)
            .into_model::<StaffAttendanceRow>()
            .all(&self.db)
            .await?
            .into_iter()
            .map(StaffAttendanceRecord::try_from)
            .collect()
    }
}
