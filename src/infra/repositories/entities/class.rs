//! Class database entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    /// Homeroom staff member
    pub walikelas_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::staff::Entity",
        from = "Column::WalikelasId",
        to = "super::staff::Column::Id"
    )]
    Walikelas,
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Walikelas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
