//! Report service - Monthly attendance report and dashboard counters.
//!
//! Both reports are read-only fan-outs over independent queries, run
//! concurrently through [`parallel`](super::parallel).

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use super::parallel;
use crate::domain::attendance::{AttendanceCriteria, TimeWindow};
use crate::domain::report::{attendance_rate, AttendanceReport, DashboardSummary, ReportQuery, ReportTotals};
use crate::domain::{AdmissionStatus, AttendanceTotals, StaffRole};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[async_trait]
pub trait ReportService: Send + Sync {
    /// Student, teacher and employee attendance for one calendar month
    async fn attendance_report(&self, query: ReportQuery) -> AppResult<AttendanceReport>;

    async fn summary(&self) -> AppResult<DashboardSummary>;
}

pub struct ReportBuilder<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ReportBuilder<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ReportService for ReportBuilder<U> {
    async fn attendance_report(&self, query: ReportQuery) -> AppResult<AttendanceReport> {
        let window = query.window()?;
        let criteria = AttendanceCriteria {
            window,
            class_id: query.class_id.clone(),
            student_id: None,
        };

        let attendance = self.uow.attendance();
        let (students, teachers, employees) = parallel::join3(
            attendance.list(criteria),
            attendance.list_staff(window, Some(StaffRole::Teacher)),
            attendance.list_staff(window, Some(StaffRole::Employee)),
        )
        .await?;

        let totals = ReportTotals {
            students: AttendanceTotals::tally(students.iter().map(|r| r.status)),
            teachers: AttendanceTotals::tally(teachers.iter().map(|r| r.status)),
            employees: AttendanceTotals::tally(employees.iter().map(|r| r.status)),
        };

        Ok(AttendanceReport {
            year: query.year,
            month: query.month,
            class_id: query.class_id,
            students,
            teachers,
            employees,
            totals,
        })
    }

    async fn summary(&self) -> AppResult<DashboardSummary> {
        let now = Utc::now();
        let today = now.date_naive();
        let criteria = AttendanceCriteria {
            window: TimeWindow::days(Some(today), Some(today)),
            ..Default::default()
        };

        let staff = self.uow.staff();
        let (students, teachers, employees) = parallel::join3(
            self.uow.students().count(),
            staff.count_by_role(StaffRole::Teacher),
            staff.count_by_role(StaffRole::Employee),
        )
        .await?;

        let (classes, pending_admissions, records) = parallel::join3(
            self.uow.classes().count(),
            self.uow.admissions().count_by_status(AdmissionStatus::Pending),
            self.uow.attendance().list(criteria),
        )
        .await?;

        let today_totals = AttendanceTotals::tally(records.iter().map(|r| r.status));

        Ok(DashboardSummary {
            students,
            teachers,
            employees,
            classes,
            pending_admissions,
            today: today_totals,
            attendance_rate: attendance_rate(&today_totals, students),
            generated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AttendanceRecord, AttendanceStatus, StaffAttendanceRecord};
    use crate::infra::MockAttendanceRepository;
    use crate::services::testing::TestUnitOfWork;

    fn student_record(status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: "ATT-0000000001".into(),
            student_id: "STD-0000000001".into(),
            student_name: Some("Ahmad Fauzi".into()),
            class_id: Some("CLS-001".into()),
            class_name: Some("X IPA 1".into()),
            status,
            timestamp: Utc::now(),
            recorded_by: None,
        }
    }

    fn staff_record(role: StaffRole, status: AttendanceStatus) -> StaffAttendanceRecord {
        StaffAttendanceRecord {
            id: "SAT-0000000001".into(),
            staff_id: "STF-0000000001".into(),
            staff_name: Some("Siti Rahmawati".into()),
            role: Some(role),
            status,
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_report_totals_per_group() {
        let mut attendance = MockAttendanceRepository::new();
        attendance.expect_list().returning(|_| {
            Ok(vec![
                student_record(AttendanceStatus::Present),
                student_record(AttendanceStatus::Late),
                student_record(AttendanceStatus::Present),
            ])
        });
        attendance.expect_list_staff().returning(|_, role| {
            let role = role.unwrap_or(StaffRole::Teacher);
            Ok(match role {
                StaffRole::Teacher => vec![staff_record(role, AttendanceStatus::Absent)],
                StaffRole::Employee => vec![
                    staff_record(role, AttendanceStatus::Present),
                    staff_record(role, AttendanceStatus::Present),
                ],
            })
        });

        let uow = TestUnitOfWork {
            attendance: Arc::new(attendance),
            ..Default::default()
        };
        let service = ReportBuilder::new(Arc::new(uow));

        let report = service
            .attendance_report(ReportQuery {
                year: 2026,
                month: 10,
                class_id: None,
            })
            .await
            .unwrap();

        assert_eq!(report.totals.students.present, 2);
        assert_eq!(report.totals.students.late, 1);
        assert_eq!(report.totals.teachers.absent, 1);
        assert_eq!(report.totals.employees.present, 2);
    }

    #[tokio::test]
    async fn test_report_rejects_bad_month() {
        let service = ReportBuilder::new(Arc::new(TestUnitOfWork::default()));
        let err = service
            .attendance_report(ReportQuery {
                year: 2026,
                month: 13,
                class_id: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Bulan tidak valid.");
    }
}
