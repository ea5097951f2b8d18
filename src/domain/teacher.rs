//! Legacy teacher records, kept alongside the unified staff table.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::fields::{blank_as_none, id_list, required};
use crate::errors::AppResult;

const TEACHER_REQUIRED_MESSAGE: &str = "Nama, NIP, dan Mata Pelajaran harus diisi.";

/// Create/update teacher request body
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub nip: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub subject_id: Option<String>,
    #[serde(default, deserialize_with = "id_list")]
    pub taught_class_ids: Vec<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(url(message = "URL avatar tidak valid."))]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub avatar_hint: Option<String>,
}

/// Validated teacher data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeacher {
    pub name: String,
    pub nip: String,
    pub subject_id: String,
    pub taught_class_ids: Vec<String>,
    pub avatar_url: Option<String>,
    pub avatar_hint: Option<String>,
}

impl TryFrom<TeacherRequest> for NewTeacher {
    type Error = crate::errors::AppError;

    fn try_from(request: TeacherRequest) -> AppResult<Self> {
        Ok(Self {
            name: required(request.name, TEACHER_REQUIRED_MESSAGE)?,
            nip: required(request.nip, TEACHER_REQUIRED_MESSAGE)?,
            subject_id: required(request.subject_id, TEACHER_REQUIRED_MESSAGE)?,
            taught_class_ids: request.taught_class_ids,
            avatar_url: request.avatar_url,
            avatar_hint: request.avatar_hint,
        })
    }
}

/// Teacher row enriched for listing
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    #[schema(example = "TCH-0a9b8c7d6e")]
    pub id: String,
    pub name: String,
    pub nip: String,
    pub subject_id: String,
    pub subject_name: Option<String>,
    pub avatar_url: String,
    pub avatar_hint: String,
    pub taught_class_ids: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherList {
    pub teachers: Vec<Teacher>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherCreated {
    pub message: String,
    pub teacher_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_requires_all_identity_fields() {
        let request = TeacherRequest {
            name: Some("Agus".into()),
            nip: Some("1234567890".into()),
            ..Default::default()
        };
        let err = NewTeacher::try_from(request).unwrap_err();
        assert_eq!(err.to_string(), TEACHER_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_teacher_class_ids_default_empty() {
        let request: TeacherRequest =
            serde_json::from_str(r#"{"name":"Agus","nip":"1234567890","subjectId":"SUB-1"}"#)
                .unwrap();
        let teacher = NewTeacher::try_from(request).unwrap();
        assert!(teacher.taught_class_ids.is_empty());
    }
}
