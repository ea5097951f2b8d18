//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services use Unit of Work pattern for centralized repository
//! access and transaction management.

mod admission_service;
mod attendance_service;
mod auth_service;
mod class_service;
pub mod container;
mod journal_service;
mod report_service;
mod schedule_service;
mod staff_service;
mod student_service;
mod subject_service;
mod teacher_service;
mod user_service;

#[cfg(test)]
pub(crate) mod testing;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use admission_service::{AdmissionManager, AdmissionService};
pub use attendance_service::{AttendanceManager, AttendanceService};
pub use auth_service::{AuthService, Authenticator};
pub use class_service::{ClassManager, ClassService};
pub use journal_service::{JournalManager, JournalService};
pub use report_service::{ReportBuilder, ReportService};
pub use schedule_service::{ScheduleManager, ScheduleService};
pub use staff_service::{StaffManager, StaffService};
pub use student_service::{StudentManager, StudentService};
pub use subject_service::{SubjectManager, SubjectService};
pub use teacher_service::{TeacherManager, TeacherService};
pub use user_service::{UserManager, UserService};

// Parallel execution utilities
pub use container::parallel;

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
