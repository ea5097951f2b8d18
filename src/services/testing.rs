//! Unit of Work over mocked repositories for service unit tests.
//!
//! Repositories without expectations panic when called, so a test only
//! wires up the ones it exercises. Transactions need a real database and
//! are covered by the integration tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::infra::{
    AdmissionRepository, AttendanceRepository, ClassRepository, JournalRepository,
    MockAdmissionRepository, MockAttendanceRepository, MockClassRepository,
    MockJournalRepository, MockScheduleRepository, MockStaffRepository, MockStudentRepository,
    MockSubjectRepository, MockTeacherRepository, MockUserRepository, ScheduleRepository,
    StaffRepository, StudentRepository, SubjectRepository, TeacherRepository, TransactionContext,
    UnitOfWork, UserRepository,
};

pub(crate) struct TestUnitOfWork {
    pub subjects: Arc<dyn SubjectRepository>,
    pub classes: Arc<dyn ClassRepository>,
    pub staff: Arc<dyn StaffRepository>,
    pub teachers: Arc<dyn TeacherRepository>,
    pub users: Arc<dyn UserRepository>,
    pub students: Arc<dyn StudentRepository>,
    pub schedules: Arc<dyn ScheduleRepository>,
    pub attendance: Arc<dyn AttendanceRepository>,
    pub admissions: Arc<dyn AdmissionRepository>,
    pub journals: Arc<dyn JournalRepository>,
}

impl Default for TestUnitOfWork {
    fn default() -> Self {
        Self {
            subjects: Arc::new(MockSubjectRepository::new()),
            classes: Arc::new(MockClassRepository::new()),
            staff: Arc::new(MockStaffRepository::new()),
            teachers: Arc::new(MockTeacherRepository::new()),
            users: Arc::new(MockUserRepository::new()),
            students: Arc::new(MockStudentRepository::new()),
            schedules: Arc::new(MockScheduleRepository::new()),
            attendance: Arc::new(MockAttendanceRepository::new()),
            admissions: Arc::new(MockAdmissionRepository::new()),
            journals: Arc::new(MockJournalRepository::new()),
        }
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn subjects(&self) -> Arc<dyn SubjectRepository> {
        self.subjects.clone()
    }

    fn classes(&self) -> Arc<dyn ClassRepository> {
        self.classes.clone()
    }

    fn staff(&self) -> Arc<dyn StaffRepository> {
        self.staff.clone()
    }

    fn teachers(&self) -> Arc<dyn TeacherRepository> {
        self.teachers.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn students(&self) -> Arc<dyn StudentRepository> {
        self.students.clone()
    }

    fn schedules(&self) -> Arc<dyn ScheduleRepository> {
        self.schedules.clone()
    }

    fn attendance(&self) -> Arc<dyn AttendanceRepository> {
        self.attendance.clone()
    }

    fn admissions(&self) -> Arc<dyn AdmissionRepository> {
        self.admissions.clone()
    }

    fn journals(&self) -> Arc<dyn JournalRepository> {
        self.journals.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        Err(AppError::internal("transactions are not available in unit tests"))
    }

    async fn transaction_serializable<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        Err(AppError::internal("transactions are not available in unit tests"))
    }
}
