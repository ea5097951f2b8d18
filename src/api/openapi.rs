//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    admission_handler, attendance_handler, auth_handler, class_handler, journal_handler,
    report_handler, schedule_handler, staff_handler, student_handler, subject_handler,
    teacher_handler, user_handler,
};
use crate::domain::admission::{
    AdmissionCreated, AdmissionList, AdmissionRequest, AdmissionStatusRequest,
};
use crate::domain::attendance::{
    AttendanceCreated, AttendanceList, RecordAttendanceRequest, RecordStaffAttendanceRequest,
    StaffAttendanceList,
};
use crate::domain::class::{ClassCreated, ClassList, ClassRequest};
use crate::domain::journal::{JournalCreated, JournalList, JournalRequest};
use crate::domain::report::{AttendanceReport, DashboardSummary, ReportTotals};
use crate::domain::schedule::{ScheduleCreated, ScheduleList, ScheduleRequest};
use crate::domain::staff::{StaffCreated, StaffList, StaffRequest};
use crate::domain::student::{StudentCreated, StudentList, StudentRequest};
use crate::domain::subject::{SubjectCreated, SubjectList, SubjectRequest};
use crate::domain::teacher::{TeacherCreated, TeacherList, TeacherRequest};
use crate::domain::user::{
    CreateUserRequest, LoginRequest, LoginResponse, UpdateUserRequest, UserCreated, UserList,
};
use crate::domain::{
    Admission, AdmissionStatus, AttendanceRecord, AttendanceStatus, AttendanceTotals, Class,
    Gender, Journal, Schedule, Staff, StaffAttendanceRecord, StaffRole, Student, Subject, Teacher,
    UserResponse, UserRole, Weekday,
};
use crate::types::MessageResponse;

/// OpenAPI documentation for the school administration API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sekolah API",
        version = "0.1.0",
        description = "School administration: staff, classes, students, schedules, attendance, admissions and journals",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::login,
        class_handler::list_classes,
        class_handler::get_class,
        class_handler::create_class,
        class_handler::update_class,
        class_handler::delete_class,
        staff_handler::list_staff,
        staff_handler::get_staff,
        staff_handler::create_staff,
        staff_handler::update_staff,
        staff_handler::delete_staff,
        teacher_handler::list_teachers,
        teacher_handler::get_teacher,
        teacher_handler::create_teacher,
        teacher_handler::update_teacher,
        teacher_handler::delete_teacher,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        student_handler::list_students,
        student_handler::get_student,
        student_handler::create_student,
        student_handler::update_student,
        student_handler::delete_student,
        subject_handler::list_subjects,
        subject_handler::get_subject,
        subject_handler::create_subject,
        subject_handler::update_subject,
        subject_handler::delete_subject,
        schedule_handler::list_schedules,
        schedule_handler::get_schedule,
        schedule_handler::create_schedule,
        schedule_handler::update_schedule,
        schedule_handler::delete_schedule,
        attendance_handler::list_attendance,
        attendance_handler::record_attendance,
        attendance_handler::list_staff_attendance,
        attendance_handler::record_staff_attendance,
        admission_handler::list_admissions,
        admission_handler::get_admission,
        admission_handler::register_admission,
        admission_handler::update_admission_status,
        admission_handler::delete_admission,
        journal_handler::list_journals,
        journal_handler::get_journal,
        journal_handler::create_journal,
        journal_handler::delete_journal,
        report_handler::attendance_report,
        report_handler::summary,
    ),
    components(
        schemas(
            MessageResponse,
            // Accounts
            UserRole, UserResponse, UserList, UserCreated,
            CreateUserRequest, UpdateUserRequest, LoginRequest, LoginResponse,
            // People and classes
            Class, ClassList, ClassCreated, ClassRequest,
            StaffRole, Staff, StaffList, StaffCreated, StaffRequest,
            Teacher, TeacherList, TeacherCreated, TeacherRequest,
            Student, StudentList, StudentCreated, StudentRequest,
            Subject, SubjectList, SubjectCreated, SubjectRequest,
            // Timetable and logs
            Weekday, Schedule, ScheduleList, ScheduleCreated, ScheduleRequest,
            AttendanceStatus, AttendanceRecord, StaffAttendanceRecord, AttendanceTotals,
            AttendanceList, StaffAttendanceList, AttendanceCreated,
            RecordAttendanceRequest, RecordStaffAttendanceRequest,
            AdmissionStatus, Gender, Admission, AdmissionList, AdmissionCreated,
            AdmissionRequest, AdmissionStatusRequest,
            Journal, JournalList, JournalCreated, JournalRequest,
            AttendanceReport, ReportTotals, DashboardSummary,
        )
    ),
    tags(
        (name = "Authentication", description = "Credential check"),
        (name = "Classes", description = "Classes and homeroom teachers"),
        (name = "Staff", description = "Teachers and employees"),
        (name = "Teachers", description = "Legacy teacher records"),
        (name = "Users", description = "User accounts"),
        (name = "Students", description = "Student enrolment"),
        (name = "Subjects", description = "Subjects"),
        (name = "Schedules", description = "Weekly timetable"),
        (name = "Attendance", description = "Student and staff attendance"),
        (name = "Admissions", description = "New student registration"),
        (name = "Journals", description = "Teaching journals"),
        (name = "Reports", description = "Attendance report and dashboard")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_api_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/login"));
        assert!(doc.paths.paths.contains_key("/api/staff/{id}"));
        assert!(doc.paths.paths.contains_key("/api/admissions/{id}/status"));
    }
}
