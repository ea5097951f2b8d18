//! Staff service - Teachers and employees in one table.
//!
//! Every write touches `staff` plus its `staff_classes` links (and on
//! delete, homeroom references and user accounts), so all of them run
//! inside a single transaction.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{EntityId, NewStaff, Staff};
use crate::errors::{AppError, AppResult, OptionExt, ReferenceExt};
use crate::infra::{TransactionContext, UnitOfWork};
use crate::with_transaction;

const STAFF_NOT_FOUND: &str = "Staf tidak ditemukan.";
const UNKNOWN_REFERENCE: &str = "Mata pelajaran atau kelas yang dipilih tidak ditemukan.";
const STAFF_IN_USE: &str =
    "Gagal menghapus staf karena masih ada data jurnal atau jadwal yang terkait.";

/// Staff service trait for dependency injection.
#[async_trait]
pub trait StaffService: Send + Sync {
    async fn list_staff(&self) -> AppResult<Vec<Staff>>;

    async fn get_staff(&self, id: &str) -> AppResult<Staff>;

    /// Insert the staff row and its class links; returns the new ID
    async fn create_staff(&self, staff: NewStaff) -> AppResult<String>;

    /// Overwrite the row and replace its class links
    async fn update_staff(&self, id: &str, staff: NewStaff) -> AppResult<()>;

    /// Detach from classes and accounts, then remove the row
    async fn delete_staff(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of StaffService using Unit of Work.
pub struct StaffManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> StaffManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

async fn insert_staff(ctx: TransactionContext<'_>, id: String, staff: NewStaff) -> AppResult<()> {
    let repo = ctx.staff();
    repo.insert(&id, &staff).await?;
    repo.replace_classes(&id, staff.kind.taught_class_ids()).await
}

async fn rewrite_staff(ctx: TransactionContext<'_>, id: String, staff: NewStaff) -> AppResult<()> {
    let repo = ctx.staff();
    if !repo.update(&id, &staff).await? {
        return Err(AppError::not_found(STAFF_NOT_FOUND));
    }
    // Employees end up with no links
    repo.replace_classes(&id, staff.kind.taught_class_ids()).await
}

async fn remove_staff(ctx: TransactionContext<'_>, id: String) -> AppResult<()> {
    if !ctx.staff().exists(&id).await? {
        return Err(AppError::not_found(STAFF_NOT_FOUND));
    }

    let homerooms = ctx.classes().clear_homeroom(&id).await?;
    ctx.staff().replace_classes(&id, &[]).await?;
    let accounts = ctx.users().delete_by_staff(&id).await?;
    ctx.staff().delete(&id).await?;

    tracing::debug!(staff_id = %id, homerooms, accounts, "staff detached");
    Ok(())
}

#[async_trait]
impl<U: UnitOfWork> StaffService for StaffManager<U> {
    async fn list_staff(&self) -> AppResult<Vec<Staff>> {
        self.uow.staff().list().await
    }

    async fn get_staff(&self, id: &str) -> AppResult<Staff> {
        self.uow
            .staff()
            .find_by_id(id)
            .await?
            .ok_or_not_found(STAFF_NOT_FOUND)
    }

    async fn create_staff(&self, staff: NewStaff) -> AppResult<String> {
        let id = EntityId::Staff.generate();
        let staff_id = id.clone();
        with_transaction!(self.uow, |ctx| insert_staff(ctx, staff_id, staff).await)
            .or_unknown_reference(UNKNOWN_REFERENCE)?;

        tracing::info!(staff_id = %id, "staff created");
        Ok(id)
    }

    async fn update_staff(&self, id: &str, staff: NewStaff) -> AppResult<()> {
        let staff_id = id.to_string();
        with_transaction!(self.uow, |ctx| rewrite_staff(ctx, staff_id, staff).await)
            .or_unknown_reference(UNKNOWN_REFERENCE)
    }

    async fn delete_staff(&self, id: &str) -> AppResult<()> {
        let staff_id = id.to_string();
        with_transaction!(self.uow, |ctx| remove_staff(ctx, staff_id).await)
            .or_referenced(STAFF_IN_USE)?;

        tracing::info!(staff_id = %id, "staff deleted");
        Ok(())
    }
}
