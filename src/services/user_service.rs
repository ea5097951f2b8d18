//! User service - Account management.
//!
//! Credentials are checked by the auth service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::user::{CreateUserRequest, UpdateUserRequest};
use crate::domain::{EntityId, NewUser, Password, User, UserChanges, UserRole};
use crate::errors::{AppError, AppResult, OptionExt, ReferenceExt};
use crate::infra::UnitOfWork;

const USER_NOT_FOUND: &str = "Pengguna tidak ditemukan.";
const EMAIL_TAKEN: &str = "Email sudah terdaftar.";
const EMAIL_IN_USE: &str = "Email sudah digunakan oleh pengguna lain.";
const UNKNOWN_LINK: &str = "Staf atau guru terkait tidak ditemukan.";

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// All accounts ordered by email
    async fn list_users(&self) -> AppResult<Vec<User>>;

    async fn get_user(&self, id: &str) -> AppResult<User>;

    /// Create an account and return its ID
    async fn create_user(&self, request: CreateUserRequest) -> AppResult<String>;

    async fn update_user(&self, id: &str, request: UpdateUserRequest) -> AppResult<()>;

    async fn delete_user(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

fn parse_role(value: Option<String>) -> AppResult<UserRole> {
    match value {
        None => Ok(UserRole::Teacher),
        Some(role) => {
            UserRole::parse(&role).ok_or_else(|| AppError::validation("Peran tidak valid."))
        }
    }
}

/// Validate an update body into the columns to write.
fn into_changes(request: UpdateUserRequest) -> AppResult<UserChanges> {
    let (email, role) = match (request.email, request.role) {
        (Some(email), Some(role)) => (email, role),
        _ => return Err(AppError::validation("Email dan peran harus diisi.")),
    };
    let role = parse_role(Some(role))?;

    let (staff_id, teacher_id) = if role.is_admin() {
        (None, None)
    } else {
        if request.staff_id.is_none() && request.teacher_id.is_none() {
            return Err(AppError::validation(
                "Guru terkait harus dipilih untuk peran teacher.",
            ));
        }
        (request.staff_id, request.teacher_id)
    };

    let password_hash = match request.password {
        Some(password) => Some(Password::new(&password)?.into_string()),
        None => None,
    };

    Ok(UserChanges {
        email,
        password_hash,
        role,
        staff_id,
        teacher_id,
    })
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.uow.users().list().await
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or_not_found(USER_NOT_FOUND)
    }

    async fn create_user(&self, request: CreateUserRequest) -> AppResult<String> {
        let (email, password) = match (request.email, request.password) {
            (Some(email), Some(password)) => (email, password),
            _ => return Err(AppError::validation("Email dan password harus diisi.")),
        };
        let role = parse_role(request.role)?;

        if self.uow.users().find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict(EMAIL_TAKEN));
        }

        let user = NewUser {
            email,
            password_hash: Password::new(&password)?.into_string(),
            role,
            staff_id: request.staff_id,
            teacher_id: request.teacher_id,
        };

        let id = EntityId::User.generate();
        self.uow
            .users()
            .create(id.clone(), user)
            .await
            .or_duplicate(EMAIL_TAKEN)
            .or_unknown_reference(UNKNOWN_LINK)?;

        tracing::info!(user_id = %id, role = %role, "user created");
        Ok(id)
    }

    async fn update_user(&self, id: &str, request: UpdateUserRequest) -> AppResult<()> {
        let changes = into_changes(request)?;

        if let Some(other) = self.uow.users().find_by_email(&changes.email).await? {
            if other.id != id {
                return Err(AppError::conflict(EMAIL_IN_USE));
            }
        }

        let updated = self
            .uow
            .users()
            .update(id, changes)
            .await
            .or_duplicate(EMAIL_IN_USE)
            .or_unknown_reference(UNKNOWN_LINK)?;

        if !updated {
            return Err(AppError::not_found(USER_NOT_FOUND));
        }
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        if !self.uow.users().delete(id).await? {
            return Err(AppError::not_found(USER_NOT_FOUND));
        }
        tracing::info!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use crate::services::testing::TestUnitOfWork;
    use chrono::Utc;

    fn stored_user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$v=19$stub".into(),
            role: UserRole::Teacher,
            staff_id: Some("STF-0000000001".into()),
            teacher_id: None,
            created_at: Utc::now(),
        }
    }

    fn update_request(role: &str) -> UpdateUserRequest {
        UpdateUserRequest {
            email: Some("guru@sekolah.sch.id".into()),
            password: None,
            role: Some(role.into()),
            staff_id: Some("STF-0000000001".into()),
            teacher_id: None,
        }
    }

    #[test]
    fn test_admin_update_clears_links() {
        let changes = into_changes(update_request("admin")).unwrap();
        assert_eq!(changes.role, UserRole::Admin);
        assert_eq!(changes.staff_id, None);
        assert_eq!(changes.teacher_id, None);
        assert!(changes.password_hash.is_none());
    }

    #[test]
    fn test_teacher_update_requires_link() {
        let request = UpdateUserRequest {
            staff_id: None,
            ..update_request("teacher")
        };
        let err = into_changes(request).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Guru terkait harus dipilih untuk peran teacher."
        );
    }

    #[test]
    fn test_update_requires_email_and_role() {
        let request = UpdateUserRequest {
            role: None,
            ..update_request("teacher")
        };
        assert_eq!(
            into_changes(request).unwrap_err().to_string(),
            "Email dan peran harus diisi."
        );
    }

    #[tokio::test]
    async fn test_create_rejects_taken_email() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|email| Ok(Some(stored_user("USR-0000000001", email))));
        users.expect_create().never();

        let uow = TestUnitOfWork {
            users: Arc::new(users),
            ..Default::default()
        };
        let service = UserManager::new(Arc::new(uow));

        let request = CreateUserRequest {
            email: Some("guru@sekolah.sch.id".into()),
            password: Some("RahasiaSekolah123".into()),
            role: None,
            staff_id: None,
            teacher_id: None,
        };
        let err = service.create_user(request).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref msg) if msg == EMAIL_TAKEN));
    }

    #[tokio::test]
    async fn test_update_rejects_email_of_other_user() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|email| Ok(Some(stored_user("USR-other00001", email))));
        users.expect_update().never();

        let uow = TestUnitOfWork {
            users: Arc::new(users),
            ..Default::default()
        };
        let service = UserManager::new(Arc::new(uow));

        let err = service
            .update_user("USR-0000000001", update_request("teacher"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), EMAIL_IN_USE);
    }

    #[tokio::test]
    async fn test_delete_missing_user() {
        let mut users = MockUserRepository::new();
        users.expect_delete().returning(|_| Ok(false));

        let uow = TestUnitOfWork {
            users: Arc::new(users),
            ..Default::default()
        };
        let service = UserManager::new(Arc::new(uow));

        let err = service.delete_user("USR-0000000404").await.unwrap_err();
        assert_eq!(err.to_string(), USER_NOT_FOUND);
    }
}
