//! Weekly lesson schedule domain types.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::fields::{blank_as_none, required};
use crate::errors::{AppError, AppResult};

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex"));

const TIME_FORMAT: &str = "%H:%M";
const TIME_MESSAGE: &str = "Format waktu tidak valid (HH:mm).";

/// School day; lessons only run Monday to Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Monday" => Some(Weekday::Monday),
            "Tuesday" => Some(Weekday::Tuesday),
            "Wednesday" => Some(Weekday::Wednesday),
            "Thursday" => Some(Weekday::Thursday),
            "Friday" => Some(Weekday::Friday),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

/// Create/update schedule request body
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "CLS-001")]
    pub class_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub subject_id: Option<String>,
    /// Teacher-role staff member
    #[serde(default, deserialize_with = "blank_as_none")]
    pub teacher_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "Monday")]
    pub day: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(regex(path = *TIME_RE, message = "Format waktu tidak valid (HH:mm)."))]
    #[schema(example = "07:30")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(regex(path = *TIME_RE, message = "Format waktu tidak valid (HH:mm)."))]
    #[schema(example = "09:00")]
    pub end_time: Option<String>,
}

/// Validated schedule slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSchedule {
    pub class_id: String,
    pub subject_id: String,
    pub teacher_id: String,
    pub day: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl NewSchedule {
    /// Times as stored: zero-padded `HH:mm`, so text order is time order.
    pub fn start_text(&self) -> String {
        self.start_time.format(TIME_FORMAT).to_string()
    }

    pub fn end_text(&self) -> String {
        self.end_time.format(TIME_FORMAT).to_string()
    }
}

fn parse_time(value: Option<String>) -> AppResult<NaiveTime> {
    let value = required(value, TIME_MESSAGE)?;
    NaiveTime::parse_from_str(&value, TIME_FORMAT).map_err(|_| AppError::validation(TIME_MESSAGE))
}

impl TryFrom<ScheduleRequest> for NewSchedule {
    type Error = AppError;

    fn try_from(request: ScheduleRequest) -> AppResult<Self> {
        let class_id = required(request.class_id, "Silakan pilih kelas.")?;
        let subject_id = required(request.subject_id, "Silakan pilih mata pelajaran.")?;
        let teacher_id = required(request.teacher_id, "Silakan pilih guru.")?;
        let day = required(request.day, "Silakan pilih hari.")?;
        let day = Weekday::parse(&day).ok_or_else(|| AppError::validation("Hari tidak valid."))?;
        let start_time = parse_time(request.start_time)?;
        let end_time = parse_time(request.end_time)?;

        if end_time <= start_time {
            return Err(AppError::validation("Jam selesai harus setelah jam mulai."));
        }

        Ok(Self {
            class_id,
            subject_id,
            teacher_id,
            day,
            start_time,
            end_time,
        })
    }
}

/// Schedule list filter
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ScheduleFilter {
    pub class_id: Option<String>,
    pub teacher_id: Option<String>,
}

/// Schedule slot enriched with class, subject and teacher names
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[schema(example = "SCH-x8y7z6w5v4")]
    pub id: String,
    pub class_id: String,
    pub class_name: Option<String>,
    pub subject_id: String,
    pub subject_name: Option<String>,
    pub teacher_id: String,
    pub teacher_name: Option<String>,
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
}

/// Order slots by weekday, then start time.
pub fn sort_week(schedules: &mut [Schedule]) {
    schedules.sort_by(|a, b| (a.day, &a.start_time).cmp(&(b.day, &b.start_time)));
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleList {
    pub schedules: Vec<Schedule>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCreated {
    pub message: String,
    pub schedule_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start: &str, end: &str) -> ScheduleRequest {
        ScheduleRequest {
            class_id: Some("CLS-001".into()),
            subject_id: Some("SUB-0000000001".into()),
            teacher_id: Some("STF-0000000001".into()),
            day: Some("Monday".into()),
            start_time: Some(start.into()),
            end_time: Some(end.into()),
        }
    }

    #[test]
    fn test_times_are_normalized() {
        let schedule = NewSchedule::try_from(request("7:30", "09:00")).unwrap();
        assert_eq!(schedule.start_text(), "07:30");
        assert_eq!(schedule.end_text(), "09:00");
    }

    #[test]
    fn test_end_must_follow_start() {
        let err = NewSchedule::try_from(request("09:00", "09:00")).unwrap_err();
        assert_eq!(err.to_string(), "Jam selesai harus setelah jam mulai.");
    }

    #[test]
    fn test_weekend_is_rejected() {
        let mut req = request("07:00", "08:00");
        req.day = Some("Saturday".into());
        assert!(NewSchedule::try_from(req).is_err());
    }

    #[test]
    fn test_regex_rule_rejects_bad_format() {
        assert!(request("25:00", "26:00").validate().is_err());
        assert!(request("07:00", "08:00").validate().is_ok());
    }

    #[test]
    fn test_sort_week() {
        let slot = |id: &str, day, start: &str| Schedule {
            id: id.into(),
            class_id: "CLS-001".into(),
            class_name: None,
            subject_id: "SUB-1".into(),
            subject_name: None,
            teacher_id: "STF-1".into(),
            teacher_name: None,
            day,
            start_time: start.into(),
            end_time: "23:00".into(),
        };
        let mut week = vec![
            slot("c", Weekday::Friday, "07:00"),
            slot("b", Weekday::Monday, "09:00"),
            slot("a", Weekday::Monday, "07:00"),
        ];
        sort_week(&mut week);
        let ids: Vec<_> = week.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }
}
