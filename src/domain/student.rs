//! Student domain types.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::fields::{blank_as_none, required};
use crate::errors::AppResult;

/// Create/update student request body
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(min = 2, message = "Nama minimal harus 2 karakter."))]
    #[schema(example = "Ahmad Fauzi")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "CLS-001")]
    pub class_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(url(message = "URL avatar tidak valid."))]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub avatar_hint: Option<String>,
}

/// Validated student data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub class_id: String,
    pub avatar_url: Option<String>,
    pub avatar_hint: Option<String>,
}

impl TryFrom<StudentRequest> for NewStudent {
    type Error = crate::errors::AppError;

    fn try_from(request: StudentRequest) -> AppResult<Self> {
        Ok(Self {
            name: required(request.name, "Nama siswa harus diisi.")?,
            class_id: required(request.class_id, "Silakan pilih kelas.")?,
            avatar_url: request.avatar_url,
            avatar_hint: request.avatar_hint,
        })
    }
}

/// Student list filter
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StudentFilter {
    /// Only students of this class
    pub class_id: Option<String>,
}

/// Student row enriched with class name
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[schema(example = "STD-q1w2e3r4t5")]
    pub id: String,
    pub name: String,
    pub class_id: String,
    pub class_name: Option<String>,
    pub avatar_url: String,
    pub avatar_hint: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentList {
    pub students: Vec<Student>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentCreated {
    pub message: String,
    pub student_id: String,
}
