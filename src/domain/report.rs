//! Monthly attendance report and dashboard summary.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::attendance::{AttendanceRecord, AttendanceTotals, StaffAttendanceRecord, TimeWindow};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    #[param(example = 2026)]
    pub year: i32,
    /// 1..=12
    #[param(example = 10)]
    pub month: u32,
    pub class_id: Option<String>,
}

impl ReportQuery {
    /// `[first day 00:00, first day of next month 00:00)`
    pub fn window(&self) -> AppResult<TimeWindow> {
        let invalid = || AppError::validation("Bulan tidak valid.");
        if !(1..=12).contains(&self.month) {
            return Err(invalid());
        }
        let start = NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or_else(invalid)?;
        let end = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        }
        .ok_or_else(invalid)?;

        Ok(TimeWindow {
            from: start.and_hms_opt(0, 0, 0).map(|d| d.and_utc()),
            to: end.and_hms_opt(0, 0, 0).map(|d| d.and_utc()),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, ToSchema)]
pub struct ReportTotals {
    pub students: AttendanceTotals,
    pub teachers: AttendanceTotals,
    pub employees: AttendanceTotals,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReport {
    pub year: i32,
    pub month: u32,
    pub class_id: Option<String>,
    pub students: Vec<AttendanceRecord>,
    pub teachers: Vec<StaffAttendanceRecord>,
    pub employees: Vec<StaffAttendanceRecord>,
    pub totals: ReportTotals,
}

/// Dashboard counters
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub students: u64,
    pub teachers: u64,
    pub employees: u64,
    pub classes: u64,
    pub pending_admissions: u64,
    /// Student attendance recorded today
    pub today: AttendanceTotals,
    /// Present plus late over enrolled students, in percent
    pub attendance_rate: f64,
    pub generated_at: DateTime<Utc>,
}

/// Percentage of students who showed up, rounded to one decimal.
pub fn attendance_rate(today: &AttendanceTotals, students: u64) -> f64 {
    if students == 0 {
        return 0.0;
    }
    let attended = (today.present + today.late) as f64;
    (attended / students as f64 * 1000.0).round() / 10.0
}
