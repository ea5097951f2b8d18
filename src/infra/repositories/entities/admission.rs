//! Admission application entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub previous_school: String,
    pub registration_date: DateTimeUtc,
    pub status: String,
    pub parent_name: String,
    pub contact: String,
    pub birth_place: String,
    pub birth_date: Date,
    pub gender: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub academic_year: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
