//! HTTP request handlers.

pub mod admission_handler;
pub mod attendance_handler;
pub mod auth_handler;
pub mod class_handler;
pub mod journal_handler;
pub mod report_handler;
pub mod schedule_handler;
pub mod staff_handler;
pub mod student_handler;
pub mod subject_handler;
pub mod teacher_handler;
pub mod user_handler;

pub use admission_handler::admission_routes;
pub use attendance_handler::{attendance_routes, staff_attendance_routes};
pub use auth_handler::auth_routes;
pub use class_handler::class_routes;
pub use journal_handler::journal_routes;
pub use report_handler::report_routes;
pub use schedule_handler::schedule_routes;
pub use staff_handler::staff_routes;
pub use student_handler::student_routes;
pub use subject_handler::subject_routes;
pub use teacher_handler::teacher_routes;
pub use user_handler::user_routes;
