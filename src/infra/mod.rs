//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over the SeaORM entities
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    AdmissionRepository, AttendanceRepository, ClassRepository, JournalRepository,
    ScheduleRepository, StaffRepository, StudentRepository, SubjectRepository, TeacherRepository,
    UserRepository,
};
pub use unit_of_work::{
    Persistence, TransactionContext, TxClassRepository, TxStaffRepository, TxTeacherRepository,
    TxUserRepository, UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockAdmissionRepository, MockAttendanceRepository, MockClassRepository,
    MockJournalRepository, MockScheduleRepository, MockStaffRepository, MockStudentRepository,
    MockSubjectRepository, MockTeacherRepository, MockUserRepository,
};
