//! Repository layer - Data access abstraction
//!
//! Each repository trait covers the single-statement reads and writes of
//! one table; multi-table writes go through the unit of work.

pub(crate) mod base;
pub(crate) mod entities;

mod admission_repository;
mod attendance_repository;
mod class_repository;
mod journal_repository;
mod schedule_repository;
mod staff_repository;
mod student_repository;
mod subject_repository;
mod teacher_repository;
mod user_repository;

pub use admission_repository::{AdmissionRepository, AdmissionStore};
pub use attendance_repository::{AttendanceRepository, AttendanceStore};
pub use class_repository::{ClassRepository, ClassStore};
pub use journal_repository::{JournalRepository, JournalStore};
pub use schedule_repository::{ScheduleRepository, ScheduleStore};
pub use staff_repository::{StaffRepository, StaffStore};
pub use student_repository::{StudentRepository, StudentStore};
pub use subject_repository::{SubjectRepository, SubjectStore};
pub use teacher_repository::{TeacherRepository, TeacherStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use admission_repository::MockAdmissionRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use attendance_repository::MockAttendanceRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use class_repository::MockClassRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use journal_repository::MockJournalRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use schedule_repository::MockScheduleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use staff_repository::MockStaffRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use student_repository::MockStudentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use subject_repository::MockSubjectRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use teacher_repository::MockTeacherRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
