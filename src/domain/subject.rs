//! Subject (mata pelajaran) domain types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::fields::{blank_as_none, required};
use crate::errors::AppResult;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct SubjectRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(min = 2, message = "Nama mata pelajaran minimal harus 2 karakter."))]
    #[schema(example = "Matematika")]
    pub name: Option<String>,
}

impl SubjectRequest {
    pub fn into_name(self) -> AppResult<String> {
        required(self.name, "Nama mata pelajaran harus diisi.")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Subject {
    #[schema(example = "SUB-m4t3m4t1k4")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubjectList {
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectCreated {
    pub message: String,
    pub subject_id: String,
}
