//! Domain layer - Core school entities and request rules
//!
//! Request DTOs validate themselves into the `New*` types the services
//! write; enriched views are what the API returns.

pub mod admission;
pub mod attendance;
pub mod class;
pub mod fields;
pub mod id;
pub mod journal;
pub mod password;
pub mod report;
pub mod schedule;
pub mod staff;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod user;

pub use admission::{Admission, AdmissionStatus, Gender, NewAdmission};
pub use attendance::{AttendanceRecord, AttendanceStatus, AttendanceTotals, StaffAttendanceRecord};
pub use class::{Class, NewClass};
pub use id::EntityId;
pub use journal::{Journal, NewJournal};
pub use password::Password;
pub use schedule::{NewSchedule, Schedule, Weekday};
pub use staff::{NewStaff, Staff, StaffKind, StaffRole};
pub use student::{NewStudent, Student};
pub use subject::Subject;
pub use teacher::{NewTeacher, Teacher};
pub use user::{NewUser, User, UserChanges, UserResponse, UserRole};
