//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and owns the transaction lifecycle.
//! Multi-table writes (staff and teacher links, cascading deletes,
//! sequential class IDs) run on the `Tx*` repositories handed out by
//! [`TransactionContext`], so they commit or roll back together.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, AccessMode, ActiveModelTrait, ColumnTrait, DatabaseConnection,
    DatabaseTransaction, EntityTrait, IsolationLevel, QueryFilter, QuerySelect, Set,
    TransactionTrait,
};
use std::sync::Arc;

use super::repositories::base;
use super::repositories::entities::{
    class::{self, Entity as ClassEntity},
    staff::{self, Entity as StaffEntity},
    staff_class::{self, Entity as StaffClassEntity},
    teacher::{self, Entity as TeacherEntity},
    teacher_class::{self, Entity as TeacherClassEntity},
    user::{self, Entity as UserEntity},
};
use super::repositories::{
    AdmissionRepository, AdmissionStore, AttendanceRepository, AttendanceStore, ClassRepository,
    ClassStore, JournalRepository, JournalStore, ScheduleRepository, ScheduleStore,
    StaffRepository, StaffStore, StudentRepository, StudentStore, SubjectRepository, SubjectStore,
    TeacherRepository, TeacherStore, UserRepository, UserStore,
};
use crate::config::{default_avatar_url, DEFAULT_AVATAR_HINT};
use crate::domain::{NewClass, NewStaff, NewTeacher, StaffKind};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Note: This trait is not mockable directly due to generic methods.
/// Service tests implement it over the mocked repositories instead.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn subjects(&self) -> Arc<dyn SubjectRepository>;

    fn classes(&self) -> Arc<dyn ClassRepository>;

    fn staff(&self) -> Arc<dyn StaffRepository>;

    fn teachers(&self) -> Arc<dyn TeacherRepository>;

    fn users(&self) -> Arc<dyn UserRepository>;

    fn students(&self) -> Arc<dyn StudentRepository>;

    fn schedules(&self) -> Arc<dyn ScheduleRepository>;

    fn attendance(&self) -> Arc<dyn AttendanceRepository>;

    fn admissions(&self) -> Arc<dyn AdmissionRepository>;

    fn journals(&self) -> Arc<dyn JournalRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is automatically committed on success or rolled back on error.
    /// Uses ReadCommitted isolation level by default.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;

    /// Execute a closure within a transaction with serializable isolation.
    ///
    /// Used where a value is derived from existing rows, such as the next class number.
    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn classes(&self) -> TxClassRepository<'_> {
        TxClassRepository { txn: self.txn }
    }

    pub fn staff(&self) -> TxStaffRepository<'_> {
        TxStaffRepository { txn: self.txn }
    }

    pub fn teachers(&self) -> TxTeacherRepository<'_> {
        TxTeacherRepository { txn: self.txn }
    }

    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    subjects: Arc<SubjectStore>,
    classes: Arc<ClassStore>,
    staff: Arc<StaffStore>,
    teachers: Arc<TeacherStore>,
    users: Arc<UserStore>,
    students: Arc<StudentStore>,
    schedules: Arc<ScheduleStore>,
    attendance: Arc<AttendanceStore>,
    admissions: Arc<AdmissionStore>,
    journals: Arc<JournalStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            subjects: Arc::new(SubjectStore::new(db.clone())),
            classes: Arc::new(ClassStore::new(db.clone())),
            staff: Arc::new(StaffStore::new(db.clone())),
            teachers: Arc::new(TeacherStore::new(db.clone())),
            users: Arc::new(UserStore::new(db.clone())),
            students: Arc::new(StudentStore::new(db.clone())),
            schedules: Arc::new(ScheduleStore::new(db.clone())),
            attendance: Arc::new(AttendanceStore::new(db.clone())),
            admissions: Arc::new(AdmissionStore::new(db.clone())),
            journals: Arc::new(JournalStore::new(db.clone())),
            db,
        }
    }

    /// Internal transaction execution with configurable isolation level
    async fn execute_transaction<F, T>(&self, isolation: IsolationLevel, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(Some(isolation), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn subjects(&self) -> Arc<dyn SubjectRepository> {
        self.subjects.clone()
    }

    fn classes(&self) -> Arc<dyn ClassRepository> {
        self.classes.clone()
    }

    fn staff(&self) -> Arc<dyn StaffRepository> {
        self.staff.clone()
    }

    fn teachers(&self) -> Arc<dyn TeacherRepository> {
        self.teachers.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn students(&self) -> Arc<dyn StudentRepository> {
        self.students.clone()
    }

    fn schedules(&self) -> Arc<dyn ScheduleRepository> {
        self.schedules.clone()
    }

    fn attendance(&self) -> Arc<dyn AttendanceRepository> {
        self.attendance.clone()
    }

    fn admissions(&self) -> Arc<dyn AdmissionRepository> {
        self.admissions.clone()
    }

    fn journals(&self) -> Arc<dyn JournalRepository> {
        self.journals.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        self.execute_transaction(IsolationLevel::ReadCommitted, f).await
    }

    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        self.execute_transaction(IsolationLevel::Serializable, f).await
    }
}

/// Transaction-scoped class writes.
pub struct TxClassRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxClassRepository<'a> {
    /// Every existing class ID, for sequential numbering
    pub async fn ids(&self) -> AppResult<Vec<String>> {
        let ids = ClassEntity::find()
            .select_only()
            .column(class::Column::Id)
            .into_tuple::<String>()
            .all(self.txn)
            .await?;
        Ok(ids)
    }

    pub async fn insert(&self, id: String, class: NewClass) -> AppResult<()> {
        let active = class::ActiveModel {
            id: Set(id),
            name: Set(class.name),
            walikelas_id: Set(class.walikelas_id),
        };
        ClassEntity::insert(active)
            .exec_without_returning(self.txn)
            .await?;
        Ok(())
    }

    /// Detach a homeroom teacher from every class they lead
    pub async fn clear_homeroom(&self, staff_id: &str) -> AppResult<u64> {
        let result = ClassEntity::update_many()
            .col_expr(class::Column::WalikelasId, Expr::value(Option::<String>::None))
            .filter(class::Column::WalikelasId.eq(staff_id))
            .exec(self.txn)
            .await?;
        Ok(result.rows_affected)
    }
}

/// Column values that depend on the staff role; the other role's
/// columns are written as NULL.
struct RoleColumns {
    role: String,
    nip: Option<String>,
    subject_id: Option<String>,
    job_title: Option<String>,
}

impl From<&StaffKind> for RoleColumns {
    fn from(kind: &StaffKind) -> Self {
        match kind {
            StaffKind::Teacher {
                nip, subject_id, ..
            } => RoleColumns {
                role: kind.role().as_str().to_string(),
                nip: Some(nip.clone()),
                subject_id: Some(subject_id.clone()),
                job_title: None,
            },
            StaffKind::Employee { job_title } => RoleColumns {
                role: kind.role().as_str().to_string(),
                nip: None,
                subject_id: None,
                job_title: Some(job_title.clone()),
            },
        }
    }
}

/// Transaction-scoped staff writes.
pub struct TxStaffRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxStaffRepository<'a> {
    pub async fn exists(&self, id: &str) -> AppResult<bool> {
        base::exists::<StaffEntity, _>(self.txn, id).await
    }

    pub async fn insert(&self, id: &str, staff: &NewStaff) -> AppResult<()> {
        let columns = RoleColumns::from(&staff.kind);
        let active = staff::ActiveModel {
            id: Set(id.to_string()),
            name: Set(staff.name.clone()),
            role: Set(columns.role),
            nip: Set(columns.nip),
            subject_id: Set(columns.subject_id),
            job_title: Set(columns.job_title),
            avatar_url: Set(staff
                .avatar_url
                .clone()
                .unwrap_or_else(|| default_avatar_url(id))),
            avatar_hint: Set(staff
                .avatar_hint
                .clone()
                .unwrap_or_else(|| DEFAULT_AVATAR_HINT.to_string())),
        };

        StaffEntity::insert(active)
            .exec_without_returning(self.txn)
            .await?;
        Ok(())
    }

    /// Overwrite the row; `false` when it does not exist
    pub async fn update(&self, id: &str, staff: &NewStaff) -> AppResult<bool> {
        let Some(model) = StaffEntity::find_by_id(id.to_string()).one(self.txn).await? else {
            return Ok(false);
        };

        let columns = RoleColumns::from(&staff.kind);
        let mut active: staff::ActiveModel = model.into();
        active.name = Set(staff.name.clone());
        active.role = Set(columns.role);
        active.nip = Set(columns.nip);
        active.subject_id = Set(columns.subject_id);
        active.job_title = Set(columns.job_title);
        if let Some(url) = &staff.avatar_url {
            active.avatar_url = Set(url.clone());
        }
        if let Some(hint) = &staff.avatar_hint {
            active.avatar_hint = Set(hint.clone());
        }

        active.update(self.txn).await?;
        Ok(true)
    }

    /// Replace all class links of a staff member
    pub async fn replace_classes(&self, id: &str, class_ids: &[String]) -> AppResult<()> {
        StaffClassEntity::delete_many()
            .filter(staff_class::Column::StaffId.eq(id))
            .exec(self.txn)
            .await?;

        if class_ids.is_empty() {
            return Ok(());
        }

        let links = class_ids.iter().map(|class_id| staff_class::ActiveModel {
            staff_id: Set(id.to_string()),
            class_id: Set(class_id.clone()),
        });
        StaffClassEntity::insert_many(links)
            .exec_without_returning(self.txn)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        base::delete_by_id::<StaffEntity, _>(self.txn, id).await
    }
}

/// Transaction-scoped legacy teacher writes.
pub struct TxTeacherRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxTeacherRepository<'a> {
    pub async fn exists(&self, id: &str) -> AppResult<bool> {
        base::exists::<TeacherEntity, _>(self.txn, id).await
    }

    pub async fn insert(&self, id: &str, teacher: &NewTeacher) -> AppResult<()> {
        let active = teacher::ActiveModel {
            id: Set(id.to_string()),
            name: Set(teacher.name.clone()),
            nip: Set(teacher.nip.clone()),
            subject_id: Set(teacher.subject_id.clone()),
            avatar_url: Set(teacher
                .avatar_url
                .clone()
                .unwrap_or_else(|| default_avatar_url(id))),
            avatar_hint: Set(teacher
                .avatar_hint
                .clone()
                .unwrap_or_else(|| DEFAULT_AVATAR_HINT.to_string())),
        };

        TeacherEntity::insert(active)
            .exec_without_returning(self.txn)
            .await?;
        Ok(())
    }

    pub async fn update(&self, id: &str, teacher: &NewTeacher) -> AppResult<bool> {
        let Some(model) = TeacherEntity::find_by_id(id.to_string()).one(self.txn).await? else {
            return Ok(false);
        };

        let mut active: teacher::ActiveModel = model.into();
        active.name = Set(teacher.name.clone());
        active.nip = Set(teacher.nip.clone());
        active.subject_id = Set(teacher.subject_id.clone());
        if let Some(url) = &teacher.avatar_url {
            active.avatar_url = Set(url.clone());
        }
        if let Some(hint) = &teacher.avatar_hint {
            active.avatar_hint = Set(hint.clone());
        }

        active.update(self.txn).await?;
        Ok(true)
    }

    pub async fn replace_classes(&self, id: &str, class_ids: &[String]) -> AppResult<()> {
        TeacherClassEntity::delete_many()
            .filter(teacher_class::Column::TeacherId.eq(id))
            .exec(self.txn)
            .await?;

        if class_ids.is_empty() {
            return Ok(());
        }

        let links = class_ids.iter().map(|class_id| teacher_class::ActiveModel {
            teacher_id: Set(id.to_string()),
            class_id: Set(class_id.clone()),
        });
        TeacherClassEntity::insert_many(links)
            .exec_without_returning(self.txn)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        base::delete_by_id::<TeacherEntity, _>(self.txn, id).await
    }
}

/// Transaction-scoped account cleanup.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRepository<'a> {
    /// Remove accounts linked to a staff member
    pub async fn delete_by_staff(&self, staff_id: &str) -> AppResult<u64> {
        let result = UserEntity::delete_many()
            .filter(user::Column::StaffId.eq(staff_id))
            .exec(self.txn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Remove accounts linked to a legacy teacher
    pub async fn delete_by_teacher(&self, teacher_id: &str) -> AppResult<u64> {
        let result = UserEntity::delete_many()
            .filter(user::Column::TeacherId.eq(teacher_id))
            .exec(self.txn)
            .await?;
        Ok(result.rows_affected)
    }
}

/// Simpler API for executing transactional operations.
///
/// This helper macro reduces boilerplate when using transactions.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
