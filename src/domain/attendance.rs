//! Student and staff attendance logs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::fields::{blank_as_none, required};
use super::staff::StaffRole;
use crate::errors::{AppError, AppResult};

/// Attendance outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
}

impl AttendanceStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Present" => Some(AttendanceStatus::Present),
            "Late" => Some(AttendanceStatus::Late),
            "Absent" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

fn parse_status(value: Option<String>) -> AppResult<AttendanceStatus> {
    let value = required(value, "Status kehadiran harus diisi.")?;
    AttendanceStatus::parse(&value).ok_or_else(|| AppError::validation("Status kehadiran tidak valid."))
}

/// Record a student's attendance
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttendanceRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "STD-q1w2e3r4t5")]
    pub student_id: Option<String>,
    /// `Present`, `Late` or `Absent`
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "Present")]
    pub status: Option<String>,
    /// Defaults to the time of the request
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// Staff member who scanned or entered the record
    #[serde(default, deserialize_with = "blank_as_none")]
    pub recorded_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendance {
    pub student_id: String,
    pub status: AttendanceStatus,
    pub timestamp: DateTime<Utc>,
    pub recorded_by: Option<String>,
}

impl RecordAttendanceRequest {
    pub fn into_new_attendance(self, now: DateTime<Utc>) -> AppResult<NewAttendance> {
        Ok(NewAttendance {
            student_id: required(self.student_id, "Siswa harus dipilih.")?,
            status: parse_status(self.status)?,
            timestamp: self.timestamp.unwrap_or(now),
            recorded_by: self.recorded_by,
        })
    }
}

/// Record a staff member's attendance
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordStaffAttendanceRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "STF-k3j9x0a1b2")]
    pub staff_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "Late")]
    pub status: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStaffAttendance {
    pub staff_id: String,
    pub status: AttendanceStatus,
    pub timestamp: DateTime<Utc>,
}

impl RecordStaffAttendanceRequest {
    pub fn into_new_attendance(self, now: DateTime<Utc>) -> AppResult<NewStaffAttendance> {
        Ok(NewStaffAttendance {
            staff_id: required(self.staff_id, "Staf harus dipilih.")?,
            status: parse_status(self.status)?,
            timestamp: self.timestamp.unwrap_or(now),
        })
    }
}

/// Half-open time window `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeWindow {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl TimeWindow {
    /// Window covering whole days, `to` inclusive.
    pub fn days(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            from: from.and_then(|d| d.and_hms_opt(0, 0, 0)).map(|d| d.and_utc()),
            to: to
                .and_then(|d| d.succ_opt())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|d| d.and_utc()),
        }
    }
}

/// Student attendance list filter
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AttendanceFilter {
    /// First day, inclusive (`YYYY-MM-DD`)
    pub from: Option<NaiveDate>,
    /// Last day, inclusive
    pub to: Option<NaiveDate>,
    pub class_id: Option<String>,
    pub student_id: Option<String>,
}

impl AttendanceFilter {
    pub fn into_criteria(self) -> AttendanceCriteria {
        AttendanceCriteria {
            window: TimeWindow::days(self.from, self.to),
            class_id: self.class_id,
            student_id: self.student_id,
        }
    }
}

/// Student attendance query as the repository sees it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceCriteria {
    pub window: TimeWindow,
    pub class_id: Option<String>,
    pub student_id: Option<String>,
}

/// Staff attendance list filter
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StaffAttendanceFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub role: Option<StaffRole>,
}

impl StaffAttendanceFilter {
    pub fn window(&self) -> TimeWindow {
        TimeWindow::days(self.from, self.to)
    }
}

/// Student attendance row with student and class names
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[schema(example = "ATT-p0o9i8u7y6")]
    pub id: String,
    pub student_id: String,
    pub student_name: Option<String>,
    pub class_id: Option<String>,
    pub class_name: Option<String>,
    pub status: AttendanceStatus,
    pub timestamp: DateTime<Utc>,
    pub recorded_by: Option<String>,
}

/// Staff attendance row with staff name and role
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffAttendanceRecord {
    #[schema(example = "SAT-l1k2j3h4g5")]
    pub id: String,
    pub staff_id: String,
    pub staff_name: Option<String>,
    pub role: Option<StaffRole>,
    pub status: AttendanceStatus,
    pub timestamp: DateTime<Utc>,
}

/// Present/Late/Absent counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
pub struct AttendanceTotals {
    pub present: u64,
    pub late: u64,
    pub absent: u64,
}

impl AttendanceTotals {
    pub fn add(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::Absent => self.absent += 1,
        }
    }

    pub fn tally<I: IntoIterator<Item = AttendanceStatus>>(statuses: I) -> Self {
        let mut totals = Self::default();
        for status in statuses {
            totals.add(status);
        }
        totals
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceList {
    pub records: Vec<AttendanceRecord>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StaffAttendanceList {
    pub records: Vec<StaffAttendanceRecord>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCreated {
    pub message: String,
    pub record_id: String,
}
