//! Class service - Class CRUD and sequential class numbering.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Class, EntityId, NewClass};
use crate::errors::{AppError, AppResult, OptionExt, ReferenceExt};
use crate::infra::{TransactionContext, UnitOfWork};

const CLASS_NOT_FOUND: &str = "Kelas tidak ditemukan.";
const UNKNOWN_HOMEROOM: &str = "Wali kelas tidak ditemukan.";
const CLASS_IN_USE: &str =
    "Gagal menghapus kelas karena masih ada siswa, jadwal, atau jurnal yang terkait.";

/// Class service trait for dependency injection.
#[async_trait]
pub trait ClassService: Send + Sync {
    /// Classes ordered by name, with homeroom name and student count
    async fn list_classes(&self) -> AppResult<Vec<Class>>;

    async fn get_class(&self, id: &str) -> AppResult<Class>;

    /// Create a class and return its `CLS-NNN` ID
    async fn create_class(&self, class: NewClass) -> AppResult<String>;

    async fn update_class(&self, id: &str, class: NewClass) -> AppResult<()>;

    async fn delete_class(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of ClassService using Unit of Work.
pub struct ClassManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ClassManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

/// Allocate the next class number and insert; must run serializable.
async fn insert_numbered(ctx: TransactionContext<'_>, class: NewClass) -> AppResult<String> {
    let existing = ctx.classes().ids().await?;
    let id = EntityId::Class.next_sequential(existing.iter().map(String::as_str))?;
    ctx.classes().insert(id.clone(), class).await?;
    Ok(id)
}

#[async_trait]
impl<U: UnitOfWork> ClassService for ClassManager<U> {
    async fn list_classes(&self) -> AppResult<Vec<Class>> {
        self.uow.classes().list().await
    }

    async fn get_class(&self, id: &str) -> AppResult<Class> {
        self.uow
            .classes()
            .find_by_id(id)
            .await?
            .ok_or_not_found(CLASS_NOT_FOUND)
    }

    async fn create_class(&self, class: NewClass) -> AppResult<String> {
        let id = self
            .uow
            .transaction_serializable(|ctx| Box::pin(insert_numbered(ctx, class)))
            .await
            .or_unknown_reference(UNKNOWN_HOMEROOM)?;

        tracing::info!(class_id = %id, "class created");
        Ok(id)
    }

    async fn update_class(&self, id: &str, class: NewClass) -> AppResult<()> {
        let updated = self
            .uow
            .classes()
            .update(id, class)
            .await
            .or_unknown_reference(UNKNOWN_HOMEROOM)?;

        if !updated {
            return Err(AppError::not_found(CLASS_NOT_FOUND));
        }
        Ok(())
    }

    async fn delete_class(&self, id: &str) -> AppResult<()> {
        let deleted = self
            .uow
            .classes()
            .delete(id)
            .await
            .or_referenced(CLASS_IN_USE)?;

        if !deleted {
            return Err(AppError::not_found(CLASS_NOT_FOUND));
        }
        tracing::info!(class_id = %id, "class deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockClassRepository;
    use crate::services::testing::TestUnitOfWork;

    #[tokio::test]
    async fn test_get_missing_class_is_not_found() {
        let mut classes = MockClassRepository::new();
        classes.expect_find_by_id().returning(|_| Ok(None));

        let uow = TestUnitOfWork {
            classes: Arc::new(classes),
            ..Default::default()
        };
        let service = ClassManager::new(Arc::new(uow));

        let err = service.get_class("CLS-404").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == CLASS_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_update_missing_class_is_not_found() {
        let mut classes = MockClassRepository::new();
        classes.expect_update().returning(|_, _| Ok(false));

        let uow = TestUnitOfWork {
            classes: Arc::new(classes),
            ..Default::default()
        };
        let service = ClassManager::new(Arc::new(uow));

        let class = NewClass {
            name: "XI IPS 2".into(),
            walikelas_id: None,
        };
        let err = service.update_class("CLS-404", class).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
