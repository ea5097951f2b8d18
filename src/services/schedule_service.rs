//! Schedule service - Weekly timetable slots.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{EntityId, NewSchedule, Schedule};
use crate::errors::{AppError, AppResult, OptionExt, ReferenceExt};
use crate::infra::UnitOfWork;

const SCHEDULE_NOT_FOUND: &str = "Jadwal tidak ditemukan.";
const NOT_A_TEACHER: &str = "Guru yang dipilih tidak valid.";
const UNKNOWN_REFERENCE: &str = "Kelas atau mata pelajaran yang dipilih tidak ditemukan.";

#[async_trait]
pub trait ScheduleService: Send + Sync {
    /// Slots in week order: weekday, then start time
    async fn list_schedules(
        &self,
        class_id: Option<String>,
        teacher_id: Option<String>,
    ) -> AppResult<Vec<Schedule>>;

    async fn get_schedule(&self, id: &str) -> AppResult<Schedule>;

    async fn create_schedule(&self, slot: NewSchedule) -> AppResult<String>;

    async fn update_schedule(&self, id: &str, slot: NewSchedule) -> AppResult<()>;

    async fn delete_schedule(&self, id: &str) -> AppResult<()>;
}

pub struct ScheduleManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ScheduleManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Slots may only be taught by teacher-role staff.
    async fn ensure_teacher(&self, staff_id: &str) -> AppResult<()> {
        match self.uow.staff().find_by_id(staff_id).await? {
            Some(staff) if staff.is_teacher() => Ok(()),
            _ => Err(AppError::validation(NOT_A_TEACHER)),
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> ScheduleService for ScheduleManager<U> {
    async fn list_schedules(
        &self,
        class_id: Option<String>,
        teacher_id: Option<String>,
    ) -> AppResult<Vec<Schedule>> {
        self.uow.schedules().list(class_id, teacher_id).await
    }

    async fn get_schedule(&self, id: &str) -> AppResult<Schedule> {
        self.uow
            .schedules()
            .find_by_id(id)
            .await?
            .ok_or_not_found(SCHEDULE_NOT_FOUND)
    }

    async fn create_schedule(&self, slot: NewSchedule) -> AppResult<String> {
        self.ensure_teacher(&slot.teacher_id).await?;

        let id = EntityId::Schedule.generate();
        self.uow
            .schedules()
            .create(id.clone(), slot)
            .await
            .or_unknown_reference(UNKNOWN_REFERENCE)?;
        Ok(id)
    }

    async fn update_schedule(&self, id: &str, slot: NewSchedule) -> AppResult<()> {
        self.ensure_teacher(&slot.teacher_id).await?;

        let updated = self
            .uow
            .schedules()
            .update(id, slot)
            .await
            .or_unknown_reference(UNKNOWN_REFERENCE)?;

        if !updated {
            return Err(AppError::not_found(SCHEDULE_NOT_FOUND));
        }
        Ok(())
    }

    async fn delete_schedule(&self, id: &str) -> AppResult<()> {
        if !self.uow.schedules().delete(id).await? {
            return Err(AppError::not_found(SCHEDULE_NOT_FOUND));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Staff, StaffRole, Weekday};
    use crate::infra::{MockScheduleRepository, MockStaffRepository};
    use crate::services::testing::TestUnitOfWork;
    use chrono::NaiveTime;

    fn slot(teacher_id: &str) -> NewSchedule {
        NewSchedule {
            class_id: "CLS-001".into(),
            subject_id: "SUB-0000000001".into(),
            teacher_id: teacher_id.into(),
            day: Weekday::Tuesday,
            start_time: NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        }
    }

    fn staff_with_role(id: &str, role: StaffRole) -> Staff {
        Staff {
            id: id.into(),
            name: "Rina Wati".into(),
            role,
            nip: None,
            subject_id: None,
            subject_name: None,
            job_title: None,
            avatar_url: String::new(),
            avatar_hint: String::new(),
            taught_class_ids: vec![],
        }
    }

    #[tokio::test]
    async fn test_employee_cannot_teach_a_slot() {
        let mut staff = MockStaffRepository::new();
        staff
            .expect_find_by_id()
            .returning(|id| Ok(Some(staff_with_role(id, StaffRole::Employee))));
        let mut schedules = MockScheduleRepository::new();
        schedules.expect_create().never();

        let uow = TestUnitOfWork {
            staff: Arc::new(staff),
            schedules: Arc::new(schedules),
            ..Default::default()
        };
        let service = ScheduleManager::new(Arc::new(uow));

        let err = service
            .create_schedule(slot("STF-0000000002"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), NOT_A_TEACHER);
    }

    #[tokio::test]
    async fn test_teacher_slot_is_created() {
        let mut staff = MockStaffRepository::new();
        staff
            .expect_find_by_id()
            .returning(|id| Ok(Some(staff_with_role(id, StaffRole::Teacher))));
        let mut schedules = MockScheduleRepository::new();
        schedules.expect_create().times(1).returning(|_, _| Ok(()));

        let uow = TestUnitOfWork {
            staff: Arc::new(staff),
            schedules: Arc::new(schedules),
            ..Default::default()
        };
        let service = ScheduleManager::new(Arc::new(uow));

        let id = service.create_schedule(slot("STF-0000000001")).await.unwrap();
        assert!(id.starts_with("SCH-"));
    }
}
