//! User account entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::fields::blank_as_none;
use crate::config::{ROLE_ADMIN, ROLE_TEACHER};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Teacher,
}

impl UserRole {
    /// Parse a stored or submitted role value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            ROLE_ADMIN => Some(UserRole::Admin),
            ROLE_TEACHER => Some(UserRole::Teacher),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::Teacher => ROLE_TEACHER,
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    /// Linked staff record
    pub staff_id: Option<String>,
    /// Linked legacy teacher record
    pub teacher_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated data for a new account; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub staff_id: Option<String>,
    pub teacher_id: Option<String>,
}

/// Validated data for an account update.
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub email: String,
    /// New hash, `None` keeps the current password
    pub password_hash: Option<String>,
    pub role: UserRole,
    pub staff_id: Option<String>,
    pub teacher_id: Option<String>,
}

/// Account creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "Format email tidak valid."))]
    #[schema(example = "guru@sekolah.sch.id")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "RahasiaSekolah123")]
    pub password: Option<String>,
    /// `admin` or `teacher` (default)
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "teacher")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub staff_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub teacher_id: Option<String>,
}

/// Account update request; an absent password keeps the current one
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "Format email tidak valid."))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub staff_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub teacher_id: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "admin@sekolah.sch.id")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "RahasiaSekolah123")]
    pub password: Option<String>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = "USR-a1b2c3d4e5")]
    pub id: String,
    pub email: String,
    #[schema(example = "teacher")]
    pub role: String,
    pub staff_id: Option<String>,
    pub teacher_id: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role.to_string(),
            staff_id: user.staff_id,
            teacher_id: user.teacher_id,
        }
    }
}

/// Successful login body
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserList {
    pub users: Vec<UserResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCreated {
    pub message: String,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(UserRole::parse("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse("teacher"), Some(UserRole::Teacher));
        assert_eq!(UserRole::parse("principal"), None);
    }

    #[test]
    fn test_only_admin_is_admin() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Teacher.is_admin());
    }

    #[test]
    fn test_response_never_contains_hash() {
        let user = User {
            id: "USR-0000000001".into(),
            email: "guru@sekolah.sch.id".into(),
            password_hash: "$argon2id$secret".into(),
            role: UserRole::Teacher,
            staff_id: Some("STF-0000000001".into()),
            teacher_id: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(!json.contains("argon2"));
        assert!(json.contains("\"staffId\":\"STF-0000000001\""));
    }
}
