use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "foyer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_foyer: i32,
    pub nom_foyer: String,
    pub capacite_foyer: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::universite::Entity")]
    Universite,
    #[sea_orm(has_many = "super::bloc::Entity")]
    Bloc,
}

impl Related<super::universite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Universite.def()
    }
}

impl Related<super::bloc::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bloc.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
