//! Attendance service - Student and staff attendance logs.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::attendance::{
    AttendanceCriteria, NewAttendance, NewStaffAttendance, TimeWindow,
};
use crate::domain::{AttendanceRecord, EntityId, StaffAttendanceRecord, StaffRole};
use crate::errors::{AppError, AppResult, ReferenceExt};
use crate::infra::UnitOfWork;

const STUDENT_NOT_FOUND: &str = "Siswa tidak ditemukan.";
const STAFF_NOT_FOUND: &str = "Staf tidak ditemukan.";
const UNKNOWN_RECORDER: &str = "Staf pencatat tidak ditemukan.";

#[async_trait]
pub trait AttendanceService: Send + Sync {
    async fn record_student(&self, record: NewAttendance) -> AppResult<String>;

    /// Newest first
    async fn list_student_records(
        &self,
        criteria: AttendanceCriteria,
    ) -> AppResult<Vec<AttendanceRecord>>;

    async fn record_staff(&self, record: NewStaffAttendance) -> AppResult<String>;

    async fn list_staff_records(
        &self,
        window: TimeWindow,
        role: Option<StaffRole>,
    ) -> AppResult<Vec<StaffAttendanceRecord>>;
}

pub struct AttendanceManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AttendanceManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AttendanceService for AttendanceManager<U> {
    async fn record_student(&self, record: NewAttendance) -> AppResult<String> {
        if self.uow.students().find_by_id(&record.student_id).await?.is_none() {
            return Err(AppError::not_found(STUDENT_NOT_FOUND));
        }

        let id = EntityId::Attendance.generate();
        self.uow
            .attendance()
            .record(id.clone(), record)
            .await
            .or_unknown_reference(UNKNOWN_RECORDER)?;

        tracing::debug!(record_id = %id, "student attendance recorded");
        Ok(id)
    }

    async fn list_student_records(
        &self,
        criteria: AttendanceCriteria,
    ) -> AppResult<Vec<AttendanceRecord>> {
        self.uow.attendance().list(criteria).await
    }

    async fn record_staff(&self, record: NewStaffAttendance) -> AppResult<String> {
        if self.uow.staff().find_by_id(&record.staff_id).await?.is_none() {
            return Err(AppError::not_found(STAFF_NOT_FOUND));
        }

        let id = EntityId::StaffAttendance.generate();
        self.uow.attendance().record_staff(id.clone(), record).await?;

        tracing::debug!(record_id = %id, "staff attendance recorded");
        Ok(id)
    }

    async fn list_staff_records(
        &self,
        window: TimeWindow,
        role: Option<StaffRole>,
    ) -> AppResult<Vec<StaffAttendanceRecord>> {
        self.uow.attendance().list_staff(window, role).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AttendanceStatus;
    use crate::infra::{MockAttendanceRepository, MockStudentRepository};
    use crate::services::testing::TestUnitOfWork;
    use chrono::Utc;

    #[tokio::test]
    async fn test_unknown_student_is_not_found() {
        let mut students = MockStudentRepository::new();
        students.expect_find_by_id().returning(|_| Ok(None));
        let mut attendance = MockAttendanceRepository::new();
        attendance.expect_record().never();

        let uow = TestUnitOfWork {
            students: Arc::new(students),
            attendance: Arc::new(attendance),
            ..Default::default()
        };
        let service = AttendanceManager::new(Arc::new(uow));

        let err = service
            .record_student(NewAttendance {
                student_id: "STD-0000000404".into(),
                status: AttendanceStatus::Present,
                timestamp: Utc::now(),
                recorded_by: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), STUDENT_NOT_FOUND);
    }
}
