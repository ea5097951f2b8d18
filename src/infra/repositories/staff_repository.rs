//! Staff repository: enriched reads.
//!
//! Writes touch `staff`, `staff_classes`, `classes` and `users` together,
//! so they live on the transaction-scoped repository in the unit of work.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select,
};

use super::base::decode;
use super::entities::{
    staff::{self, Entity as StaffEntity},
    subject,
};
use crate::domain::staff::split_class_ids;
use crate::domain::{Staff, StaffRole};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[derive(Debug, FromQueryResult)]
struct StaffRow {
    id: String,
    name: String,
    role: String,
    nip: Option<String>,
    subject_id: Option<String>,
    subject_name: Option<String>,
    job_title: Option<String>,
    avatar_url: String,
    avatar_hint: String,
    class_ids: Option<String>,
}

impl TryFrom<StaffRow> for Staff {
    type Error = AppError;

    fn try_from(row: StaffRow) -> AppResult<Self> {
        let mut taught_class_ids = split_class_ids(row.class_ids);
        taught_class_ids.sort();

        Ok(Staff {
            role: decode(&row.role, StaffRole::parse, "staff.role")?,
            id: row.id,
            name: row.name,
            nip: row.nip,
            subject_id: row.subject_id,
            subject_name: row.subject_name,
            job_title: row.job_title,
            avatar_url: row.avatar_url,
            avatar_hint: row.avatar_hint,
            taught_class_ids,
        })
    }
}

/// Correlated subquery joining an owner's linked class IDs with commas.
pub(crate) fn class_ids_aggregate(
    backend: DbBackend,
    link_table: &str,
    owner_column: &str,
    owner_table: &str,
) -> String {
    let aggregate = match backend {
        DbBackend::Postgres => "STRING_AGG(class_id, ',')",
        _ => "GROUP_CONCAT(class_id)",
    };
    format!(
        "(SELECT {} FROM {} WHERE {}.{} = {}.id)",
        aggregate, link_table, link_table, owner_column, owner_table
    )
}

fn enriched(backend: DbBackend) -> Select<StaffEntity> {
    StaffEntity::find()
        .select_only()
        .columns([
            staff::Column::Id,
            staff::Column::Name,
            staff::Column::Role,
            staff::Column::Nip,
            staff::Column::SubjectId,
            staff::Column::JobTitle,
            staff::Column::AvatarUrl,
            staff::Column::AvatarHint,
        ])
        .column_as(subject::Column::Name, "subject_name")
        .expr_as(
            Expr::cust(class_ids_aggregate(backend, "staff_classes", "staff_id", "staff")),
            "class_ids",
        )
        .join(JoinType::LeftJoin, staff::Relation::Subject.def())
}

/// Staff repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// All staff ordered by name
    async fn list(&self) -> AppResult<Vec<Staff>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Staff>>;

    async fn count_by_role(&self, role: StaffRole) -> AppResult<u64>;
}

pub struct StaffStore {
    db: DatabaseConnection,
}

impl StaffStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StaffRepository for StaffStore {
    async fn list(&self) -> AppResult<Vec<Staff>> {
        enriched(self.db.get_database_backend())
            .order_by_asc(staff::Column::Name)
            .into_model::<StaffRow>()
            .all(&self.db)
            .await?
            .into_iter()
            .map(Staff::try_from)
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Staff>> {
        enriched(self.db.get_database_backend())
            .filter(staff::Column::Id.eq(id))
            .into_model::<StaffRow>()
            .one(&self.db)
            .await?
            .map(Staff::try_from)
            .transpose()
    }

    async fn count_by_role(&self, role: StaffRole) -> AppResult<u64> {
        Ok(StaffEntity::find()
            .filter(staff::Column::Role.eq(role.as_str()))
            .count(&self.db)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_per_backend() {
        let sql = class_ids_aggregate(DbBackend::Postgres, "staff_classes", "staff_id", "staff");
        assert!(sql.starts_with("(SELECT STRING_AGG(class_id, ',')"));

        let sql = class_ids_aggregate(DbBackend::MySql, "staff_classes", "staff_id", "staff");
        assert_eq!(
            sql,
            "(SELECT GROUP_CONCAT(class_id) FROM staff_classes WHERE staff_classes.staff_id = staff.id)"
        );
    }
}
