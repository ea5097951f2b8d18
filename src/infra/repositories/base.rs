//! Generic helpers shared by every repository.
//!
//! All helpers take any `ConnectionTrait`, so the same code runs against
//! the pooled connection and inside a `DatabaseTransaction`.

use sea_orm::{ConnectionTrait, EntityTrait, PrimaryKeyTrait};

use crate::errors::{AppError, AppResult};

/// Check whether a row with the given string primary key exists.
pub async fn exists<E, C>(conn: &C, id: &str) -> AppResult<bool>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<String>,
    C: ConnectionTrait,
{
    let found = E::find_by_id(id.to_string()).one(conn).await?;
    Ok(found.is_some())
}

/// Delete a row by string primary key; `false` when nothing matched.
pub async fn delete_by_id<E, C>(conn: &C, id: &str) -> AppResult<bool>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<String>,
    C: ConnectionTrait,
{
    let result = E::delete_by_id(id.to_string()).exec(conn).await?;
    Ok(result.rows_affected > 0)
}

/// Decode an enum stored as text, failing loudly on unknown values.
pub fn decode<T>(value: &str, parse: fn(&str) -> Option<T>, column: &str) -> AppResult<T> {
    parse(value).ok_or_else(|| AppError::internal(format!("unexpected {} value '{}'", column, value)))
}
