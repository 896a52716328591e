use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::TypeChambre;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chambre")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_chambre: i32,
    #[sea_orm(unique)]
    pub numero_chambre: i64,
    pub type_c: TypeChambre,
    pub bloc_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bloc::Entity",
        from = "Column::BlocId",
        to = "super::bloc::Column::IdBloc",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Bloc,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
}

impl Related<super::bloc::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bloc.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
