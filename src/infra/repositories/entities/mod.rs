//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod admission;
pub mod attendance;
pub mod class;
pub mod journal;
pub mod schedule;
pub mod staff;
pub mod staff_attendance;
pub mod staff_class;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod teacher_class;
pub mod user;
