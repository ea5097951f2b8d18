//! Teaching journals: what a teacher covered in a class on a day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::fields::{blank_as_none, required};
use crate::errors::{AppError, AppResult};

/// Journal entry body; `materialFile` is a URL of an already uploaded file
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub staff_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub class_id: Option<String>,
    /// Defaults to the teacher's own subject
    #[serde(default, deserialize_with = "blank_as_none")]
    pub subject_id: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "2026-10-12")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(min = 3, message = "Topik pelajaran minimal harus 3 karakter."))]
    #[schema(example = "Persamaan linear satu variabel")]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(url(message = "URL materi tidak valid."))]
    pub material_file: Option<String>,
}

/// Validated journal entry; the subject is resolved by the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJournal {
    pub staff_id: String,
    pub class_id: String,
    pub subject_id: Option<String>,
    pub date: NaiveDate,
    pub topic: String,
    pub notes: String,
    pub material_file: Option<String>,
}

impl JournalRequest {
    pub fn into_new_journal(self, today: NaiveDate) -> AppResult<NewJournal> {
        Ok(NewJournal {
            staff_id: required(self.staff_id, "Guru harus dipilih.")?,
            class_id: required(self.class_id, "Silakan pilih kelas.")?,
            subject_id: self.subject_id,
            date: self.date.unwrap_or(today),
            topic: self
                .topic
                .ok_or_else(|| AppError::validation("Topik pelajaran minimal harus 3 karakter."))?,
            notes: self.notes.unwrap_or_default(),
            material_file: self.material_file,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct JournalFilter {
    pub staff_id: Option<String>,
    pub class_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
    #[schema(example = "JRN-z9x8c7v6b5")]
    pub id: String,
    pub staff_id: String,
    pub class_id: String,
    pub class_name: Option<String>,
    pub subject_id: String,
    pub subject_name: Option<String>,
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    pub topic: String,
    pub notes: String,
    pub material_file: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct JournalList {
    pub journals: Vec<Journal>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalCreated {
    pub message: String,
    pub journal_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_defaults_to_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 12).unwrap();
        let request = JournalRequest {
            staff_id: Some("STF-1".into()),
            class_id: Some("CLS-001".into()),
            topic: Some("Pecahan".into()),
            ..Default::default()
        };
        let journal = request.into_new_journal(today).unwrap();
        assert_eq!(journal.date, today);
        assert_eq!(journal.notes, "");
        assert_eq!(journal.subject_id, None);
    }

    #[test]
    fn test_class_is_required() {
        let request = JournalRequest {
            staff_id: Some("STF-1".into()),
            topic: Some("Pecahan".into()),
            ..Default::default()
        };
        let err = request.into_new_journal(NaiveDate::MIN).unwrap_err();
        assert_eq!(err.to_string(), "Silakan pilih kelas.");
    }
}
