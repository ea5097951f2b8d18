//! Legacy teacher service, kept for records predating the staff table.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{EntityId, NewTeacher, Teacher};
use crate::errors::{AppError, AppResult, OptionExt, ReferenceExt};
use crate::infra::{TransactionContext, UnitOfWork};
use crate::with_transaction;

const TEACHER_NOT_FOUND: &str = "Guru tidak ditemukan.";
const UNKNOWN_REFERENCE: &str = "Mata pelajaran atau kelas yang dipilih tidak ditemukan.";
const TEACHER_IN_USE: &str = "Gagal menghapus guru karena masih ada data yang terkait.";

#[async_trait]
pub trait TeacherService: Send + Sync {
    async fn list_teachers(&self) -> AppResult<Vec<Teacher>>;

    async fn get_teacher(&self, id: &str) -> AppResult<Teacher>;

    async fn create_teacher(&self, teacher: NewTeacher) -> AppResult<String>;

    async fn update_teacher(&self, id: &str, teacher: NewTeacher) -> AppResult<()>;

    async fn delete_teacher(&self, id: &str) -> AppResult<()>;
}

pub struct TeacherManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> TeacherManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

async fn insert_teacher(
    ctx: TransactionContext<'_>,
    id: String,
    teacher: NewTeacher,
) -> AppResult<()> {
    let repo = ctx.teachers();
    repo.insert(&id, &teacher).await?;
    repo.replace_classes(&id, &teacher.taught_class_ids).await
}

async fn rewrite_teacher(
    ctx: TransactionContext<'_>,
    id: String,
    teacher: NewTeacher,
) -> AppResult<()> {
    let repo = ctx.teachers();
    if !repo.update(&id, &teacher).await? {
        return Err(AppError::not_found(TEACHER_NOT_FOUND));
    }
    repo.replace_classes(&id, &teacher.taught_class_ids).await
}

async fn remove_teacher(ctx: TransactionContext<'_>, id: String) -> AppResult<()> {
    if !ctx.teachers().exists(&id).await? {
        return Err(AppError::not_found(TEACHER_NOT_FOUND));
    }

    // Homeroom slots point at staff IDs; a legacy ID can only match
    // when the record was migrated under the same key.
    ctx.classes().clear_homeroom(&id).await?;
    ctx.teachers().replace_classes(&id, &[]).await?;
    ctx.users().delete_by_teacher(&id).await?;
    ctx.teachers().delete(&id).await?;
    Ok(())
}

#[async_trait]
impl<U: UnitOfWork> TeacherService for TeacherManager<U> {
    async fn list_teachers(&self) -> AppResult<Vec<Teacher>> {
        self.uow.teachers().list().await
    }

    async fn get_teacher(&self, id: &str) -> AppResult<Teacher> {
        self.uow
            .teachers()
            .find_by_id(id)
            .await?
            .ok_or_not_found(TEACHER_NOT_FOUND)
    }

    async fn create_teacher(&self, teacher: NewTeacher) -> AppResult<String> {
        let id = EntityId::Teacher.generate();
        let teacher_id = id.clone();
        with_transaction!(self.uow, |ctx| insert_teacher(ctx, teacher_id, teacher).await)
            .or_unknown_reference(UNKNOWN_REFERENCE)?;

        tracing::info!(teacher_id = %id, "teacher created");
        Ok(id)
    }

    async fn update_teacher(&self, id: &str, teacher: NewTeacher) -> AppResult<()> {
        let teacher_id = id.to_string();
        with_transaction!(self.uow, |ctx| rewrite_teacher(ctx, teacher_id, teacher).await)
            .or_unknown_reference(UNKNOWN_REFERENCE)
    }

    async fn delete_teacher(&self, id: &str) -> AppResult<()> {
        let teacher_id = id.to_string();
        with_transaction!(self.uow, |ctx| remove_teacher(ctx, teacher_id).await)
            .or_referenced(TEACHER_IN_USE)?;

        tracing::info!(teacher_id = %id, "teacher deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockTeacherRepository;
    use crate::services::testing::TestUnitOfWork;

    #[tokio::test]
    async fn test_list_passes_through() {
        let mut teachers = MockTeacherRepository::new();
        teachers.expect_list().returning(|| {
            Ok(vec![Teacher {
                id: "TCH-0000000001".into(),
                name: "Agus Salim".into(),
                nip: "196801011990031001".into(),
                subject_id: "SUB-0000000001".into(),
                subject_name: Some("Fisika".into()),
                avatar_url: "https://picsum.photos/seed/TCH-0000000001/100/100".into(),
                avatar_hint: "person portrait".into(),
                taught_class_ids: vec!["CLS-001".into(), "CLS-002".into()],
            }])
        });

        let uow = TestUnitOfWork {
            teachers: Arc::new(teachers),
            ..Default::default()
        };
        let service = TeacherManager::new(Arc::new(uow));

        let list = service.list_teachers().await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].taught_class_ids.len(), 2);
    }
}
