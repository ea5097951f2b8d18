//! Staff domain: one entity for teachers and employees.
//!
//! The role decides which fields a staff member owns, so validated
//! input is a sum type ([`StaffKind`]) rather than a bag of optionals.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::fields::{blank_as_none, id_list, required};
use crate::config::{STAFF_ROLE_EMPLOYEE, STAFF_ROLE_TEACHER};
use crate::errors::{AppError, AppResult};

/// Staff role tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Teacher,
    Employee,
}

impl StaffRole {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            STAFF_ROLE_TEACHER => Some(StaffRole::Teacher),
            STAFF_ROLE_EMPLOYEE => Some(StaffRole::Employee),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StaffRole::Teacher => STAFF_ROLE_TEACHER,
            StaffRole::Employee => STAFF_ROLE_EMPLOYEE,
        }
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role-specific data of a staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaffKind {
    Teacher {
        nip: String,
        subject_id: String,
        taught_class_ids: Vec<String>,
    },
    Employee {
        job_title: String,
    },
}

impl StaffKind {
    pub fn role(&self) -> StaffRole {
        match self {
            StaffKind::Teacher { .. } => StaffRole::Teacher,
            StaffKind::Employee { .. } => StaffRole::Employee,
        }
    }

    /// Classes to link in `staff_classes`; always empty for employees.
    pub fn taught_class_ids(&self) -> &[String] {
        match self {
            StaffKind::Teacher {
                taught_class_ids, ..
            } => taught_class_ids,
            StaffKind::Employee { .. } => &[],
        }
    }
}

/// Validated staff data, ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStaff {
    pub name: String,
    pub kind: StaffKind,
    pub avatar_url: Option<String>,
    pub avatar_hint: Option<String>,
}

/// Which operation a payload is validated for; only the messages differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffIntent {
    Create,
    Update,
}

/// Create/update staff request body
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "Siti Rahmawati")]
    pub name: Option<String>,
    /// `teacher` or `employee`
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "teacher")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "198706152010012003")]
    pub nip: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub subject_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "Tata Usaha")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "id_list")]
    pub taught_class_ids: Vec<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(url(message = "URL avatar tidak valid."))]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub avatar_hint: Option<String>,
}

impl StaffRequest {
    /// Check role-dependent required fields and build the sum type.
    pub fn into_new_staff(self, intent: StaffIntent) -> AppResult<NewStaff> {
        let (name, role) = match (self.name, self.role) {
            (Some(name), Some(role)) => (name, role),
            _ => {
                return Err(AppError::validation(match intent {
                    StaffIntent::Create => "Nama dan Peran harus diisi.",
                    StaffIntent::Update => "Nama dan peran harus diisi.",
                }))
            }
        };

        let role = StaffRole::parse(&role).ok_or_else(|| AppError::validation("Peran tidak valid."))?;

        let kind = match role {
            StaffRole::Teacher => {
                let message = match intent {
                    StaffIntent::Create => "Nama, NIP, dan Mata Pelajaran harus diisi untuk guru.",
                    StaffIntent::Update => "NIP dan Mata Pelajaran harus diisi untuk guru.",
                };
                StaffKind::Teacher {
                    nip: required(self.nip, message)?,
                    subject_id: required(self.subject_id, message)?,
                    taught_class_ids: self.taught_class_ids,
                }
            }
            StaffRole::Employee => StaffKind::Employee {
                job_title: required(self.job_title, "Jabatan harus diisi untuk karyawan.")?,
            },
        };

        Ok(NewStaff {
            name,
            kind,
            avatar_url: self.avatar_url,
            avatar_hint: self.avatar_hint,
        })
    }
}

/// Staff row enriched for listing
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    #[schema(example = "STF-k3j9x0a1b2")]
    pub id: String,
    pub name: String,
    pub role: StaffRole,
    pub nip: Option<String>,
    pub subject_id: Option<String>,
    pub subject_name: Option<String>,
    pub job_title: Option<String>,
    pub avatar_url: String,
    pub avatar_hint: String,
    pub taught_class_ids: Vec<String>,
}

impl Staff {
    pub fn is_teacher(&self) -> bool {
        self.role == StaffRole::Teacher
    }
}

/// Rebuild an ID list from a comma-joined SQL aggregate.
pub fn split_class_ids(aggregate: Option<String>) -> Vec<String> {
    aggregate
        .map(|joined| {
            joined
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StaffList {
    pub staff: Vec<Staff>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffCreated {
    pub message: String,
    pub staff_id: String,
}
