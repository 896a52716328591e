use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "universite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_universite: i32,
    pub nom_universite: String,
    pub adresse: String,
    #[sea_orm(unique)]
    pub foyer_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::foyer::Entity",
        from = "Column::FoyerId",
        to = "super::foyer::Column::IdFoyer",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Foyer,
}

impl Related<super::foyer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Foyer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
