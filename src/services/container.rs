//! Service Container - Centralized service access with parallel execution support.
//!
//! Hands out one shared instance of every service, built over a single
//! unit of work.

use std::sync::Arc;

use super::{
    AdmissionService, AttendanceService, AuthService, ClassService, JournalService,
    ReportService, ScheduleService, StaffService, StudentService, SubjectService, TeacherService,
    UserService,
};
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn users(&self) -> Arc<dyn UserService>;

    fn classes(&self) -> Arc<dyn ClassService>;

    fn staff(&self) -> Arc<dyn StaffService>;

    fn teachers(&self) -> Arc<dyn TeacherService>;

    fn students(&self) -> Arc<dyn StudentService>;

    fn subjects(&self) -> Arc<dyn SubjectService>;

    fn schedules(&self) -> Arc<dyn ScheduleService>;

    fn attendance(&self) -> Arc<dyn AttendanceService>;

    fn admissions(&self) -> Arc<dyn AdmissionService>;

    fn journals(&self) -> Arc<dyn JournalService>;

    fn reports(&self) -> Arc<dyn ReportService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth: Arc<dyn AuthService>,
    users: Arc<dyn UserService>,
    classes: Arc<dyn ClassService>,
    staff: Arc<dyn StaffService>,
    teachers: Arc<dyn TeacherService>,
    students: Arc<dyn StudentService>,
    subjects: Arc<dyn SubjectService>,
    schedules: Arc<dyn ScheduleService>,
    attendance: Arc<dyn AttendanceService>,
    admissions: Arc<dyn AdmissionService>,
    journals: Arc<dyn JournalService>,
    reports: Arc<dyn ReportService>,
}

impl Services {
    /// Create service container from a database connection.
    ///
    /// Every service shares one Unit of Work over the pooled connection.
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        use super::{
            AdmissionManager, AttendanceManager, Authenticator, ClassManager, JournalManager,
            ReportBuilder, ScheduleManager, StaffManager, StudentManager, SubjectManager,
            TeacherManager, UserManager,
        };

        let uow = Arc::new(Persistence::new(db));

        Self {
            auth: Arc::new(Authenticator::new(uow.clone())),
            users: Arc::new(UserManager::new(uow.clone())),
            classes: Arc::new(ClassManager::new(uow.clone())),
            staff: Arc::new(StaffManager::new(uow.clone())),
            teachers: Arc::new(TeacherManager::new(uow.clone())),
            students: Arc::new(StudentManager::new(uow.clone())),
            subjects: Arc::new(SubjectManager::new(uow.clone())),
            schedules: Arc::new(ScheduleManager::new(uow.clone())),
            attendance: Arc::new(AttendanceManager::new(uow.clone())),
            admissions: Arc::new(AdmissionManager::new(uow.clone())),
            journals: Arc::new(JournalManager::new(uow.clone())),
            reports: Arc::new(ReportBuilder::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.users.clone()
    }

    fn classes(&self) -> Arc<dyn ClassService> {
        self.classes.clone()
    }

    fn staff(&self) -> Arc<dyn StaffService> {
        self.staff.clone()
    }

    fn teachers(&self) -> Arc<dyn TeacherService> {
        self.teachers.clone()
    }

    fn students(&self) -> Arc<dyn StudentService> {
        self.students.clone()
    }

    fn subjects(&self) -> Arc<dyn SubjectService> {
        self.subjects.clone()
    }

    fn schedules(&self) -> Arc<dyn ScheduleService> {
        self.schedules.clone()
    }

    fn attendance(&self) -> Arc<dyn AttendanceService> {
        self.attendance.clone()
    }

    fn admissions(&self) -> Arc<dyn AdmissionService> {
        self.admissions.clone()
    }

    fn journals(&self) -> Arc<dyn JournalService> {
        self.journals.clone()
    }

    fn reports(&self) -> Arc<dyn ReportService> {
        self.reports.clone()
    }
}

/// Parallel execution utilities for running independent operations concurrently.
pub mod parallel {
    use std::future::Future;
    use tokio::try_join;

    use crate::errors::AppResult;

    /// Execute three independent async operations in parallel.
    ///
    /// If any operation fails, its error is returned as soon as it
    /// completes and the others are dropped.
    pub async fn join3<F1, F2, F3, T1, T2, T3>(
        f1: F1,
        f2: F2,
        f3: F3,
    ) -> AppResult<(T1, T2, T3)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
        F3: Future<Output = AppResult<T3>>,
    {
        try_join!(f1, f2, f3)
    }
}
