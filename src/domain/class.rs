//! Class (rombongan belajar) domain types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::fields::{blank_as_none, required};
use crate::errors::{AppError, AppResult};

/// Create/update class request body
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(min = 2, message = "Nama kelas minimal 2 karakter."))]
    #[schema(example = "X IPA 1")]
    pub name: Option<String>,
    /// Homeroom staff member
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "STF-k3j9x0a1b2")]
    pub walikelas_id: Option<String>,
}

/// Validated class data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClass {
    pub name: String,
    pub walikelas_id: Option<String>,
}

impl ClassRequest {
    /// New classes need both a name and a homeroom teacher.
    pub fn into_new_class(self) -> AppResult<NewClass> {
        match (self.name, self.walikelas_id) {
            (Some(name), Some(walikelas_id)) => Ok(NewClass {
                name,
                walikelas_id: Some(walikelas_id),
            }),
            _ => Err(AppError::validation(
                "Nama kelas dan wali kelas harus diisi.",
            )),
        }
    }

    /// Updates may leave the homeroom slot empty.
    pub fn into_class_changes(self) -> AppResult<NewClass> {
        Ok(NewClass {
            name: required(self.name, "Nama kelas harus diisi.")?,
            walikelas_id: self.walikelas_id,
        })
    }
}

/// Class row enriched with homeroom name and enrolment count
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    #[schema(example = "CLS-001")]
    pub id: String,
    pub name: String,
    pub walikelas_id: Option<String>,
    pub walikelas_name: Option<String>,
    pub student_count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClassList {
    pub classes: Vec<Class>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassCreated {
    pub message: String,
    pub class_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_homeroom() {
        let request = ClassRequest {
            name: Some("X IPA 1".into()),
            walikelas_id: None,
        };
        let err = request.into_new_class().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_update_allows_empty_homeroom() {
        let request = ClassRequest {
            name: Some("X IPA 1".into()),
            walikelas_id: None,
        };
        let changes = request.into_class_changes().unwrap();
        assert_eq!(changes.walikelas_id, None);
    }
}
