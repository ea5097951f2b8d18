//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20261001_000001_create_school_tables;
mod m20261001_000002_create_teachers_table;
mod m20261001_000003_create_users_table;
mod m20261001_000004_create_activity_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_school_tables::Migration),
            Box::new(m20261001_000002_create_teachers_table::Migration),
            Box::new(m20261001_000003_create_users_table::Migration),
            Box::new(m20261001_000004_create_activity_tables::Migration),
        ]
    }
}
