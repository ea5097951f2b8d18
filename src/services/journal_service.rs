//! Journal service - Teaching journal entries.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{EntityId, Journal, NewJournal};
use crate::errors::{AppError, AppResult, OptionExt, ReferenceExt};
use crate::infra::UnitOfWork;

const JOURNAL_NOT_FOUND: &str = "Jurnal tidak ditemukan.";
const NOT_A_TEACHER: &str = "Hanya guru yang dapat mengisi jurnal mengajar.";
const UNKNOWN_REFERENCE: &str = "Kelas atau mata pelajaran yang dipilih tidak ditemukan.";

#[async_trait]
pub trait JournalService: Send + Sync {
    /// Newest date first
    async fn list_journals(
        &self,
        staff_id: Option<String>,
        class_id: Option<String>,
    ) -> AppResult<Vec<Journal>>;

    async fn get_journal(&self, id: &str) -> AppResult<Journal>;

    async fn create_journal(&self, journal: NewJournal) -> AppResult<String>;

    async fn delete_journal(&self, id: &str) -> AppResult<()>;
}

pub struct JournalManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> JournalManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> JournalService for JournalManager<U> {
    async fn list_journals(
        &self,
        staff_id: Option<String>,
        class_id: Option<String>,
    ) -> AppResult<Vec<Journal>> {
        self.uow.journals().list(staff_id, class_id).await
    }

    async fn get_journal(&self, id: &str) -> AppResult<Journal> {
        self.uow
            .journals()
            .find_by_id(id)
            .await?
            .ok_or_not_found(JOURNAL_NOT_FOUND)
    }

    async fn create_journal(&self, journal: NewJournal) -> AppResult<String> {
        let author = self
            .uow
            .staff()
            .find_by_id(&journal.staff_id)
            .await?
            .ok_or_not_found("Guru tidak ditemukan.")?;
        if !author.is_teacher() {
            return Err(AppError::validation(NOT_A_TEACHER));
        }

        let subject_id = journal
            .subject_id
            .clone()
            .or(author.subject_id)
            .ok_or_else(|| AppError::validation("Silakan pilih mata pelajaran."))?;

        let id = EntityId::Journal.generate();
        self.uow
            .journals()
            .create(id.clone(), subject_id, journal)
            .await
            .or_unknown_reference(UNKNOWN_REFERENCE)?;

        tracing::info!(journal_id = %id, "journal entry created");
        Ok(id)
    }

    async fn delete_journal(&self, id: &str) -> AppResult<()> {
        if !self.uow.journals().delete(id).await? {
            return Err(AppError::not_found(JOURNAL_NOT_FOUND));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Staff, StaffRole};
    use crate::infra::{MockJournalRepository, MockStaffRepository};
    use crate::services::testing::TestUnitOfWork;
    use chrono::NaiveDate;
    use mockall::predicate::{always, eq};

    fn teacher(id: &str) -> Staff {
        Staff {
            id: id.into(),
            name: "Siti Rahmawati".into(),
            role: StaffRole::Teacher,
            nip: Some("198706152010012003".into()),
            subject_id: Some("SUB-matematika".into()),
            subject_name: Some("Matematika".into()),
            job_title: None,
            avatar_url: String::new(),
            avatar_hint: String::new(),
            taught_class_ids: vec!["CLS-001".into()],
        }
    }

    fn entry(subject_id: Option<&str>) -> NewJournal {
        NewJournal {
            staff_id: "STF-0000000001".into(),
            class_id: "CLS-001".into(),
            subject_id: subject_id.map(str::to_string),
            date: NaiveDate::from_ymd_opt(2026, 10, 12).unwrap(),
            topic: "Persamaan linear".into(),
            notes: String::new(),
            material_file: None,
        }
    }

    #[tokio::test]
    async fn test_subject_defaults_to_teacher_subject() {
        let mut staff = MockStaffRepository::new();
        staff.expect_find_by_id().returning(|id| Ok(Some(teacher(id))));
        let mut journals = MockJournalRepository::new();
        journals
            .expect_create()
            .with(always(), eq("SUB-matematika".to_string()), always())
            .times(1)
            .returning(|_, _, _| Ok(()));

        let uow = TestUnitOfWork {
            staff: Arc::new(staff),
            journals: Arc::new(journals),
            ..Default::default()
        };
        let service = JournalManager::new(Arc::new(uow));

        let id = service.create_journal(entry(None)).await.unwrap();
        assert!(id.starts_with("JRN-"));
    }

    #[tokio::test]
    async fn test_employee_cannot_write_journal() {
        let mut staff = MockStaffRepository::new();
        staff.expect_find_by_id().returning(|id| {
            Ok(Some(Staff {
                role: StaffRole::Employee,
                subject_id: None,
                ..teacher(id)
            }))
        });

        let uow = TestUnitOfWork {
            staff: Arc::new(staff),
            ..Default::default()
        };
        let service = JournalManager::new(Arc::new(uow));

        let err = service
            .create_journal(entry(Some("SUB-1")))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), NOT_A_TEACHER);
    }
}
