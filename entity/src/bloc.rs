use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bloc")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_bloc: i32,
    pub nom_bloc: String,
    pub capacite_bloc: i64,
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
    #[sea_orm(has_many = "super::chambre::Entity")]
    Chambre,
}

impl Related<super::foyer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Foyer.def()
    }
}

impl Related<super::chambre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chambre.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
