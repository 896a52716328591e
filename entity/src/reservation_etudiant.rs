use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Join table between reservations and the students they cover.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservation_etudiant")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub reservation_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub etudiant_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reservation::Entity",
        from = "Column::ReservationId",
        to = "super::reservation::Column::IdReservation",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Reservation,
    #[sea_orm(
        belongs_to = "super::etudiant::Entity",
        from = "Column::EtudiantId",
        to = "super::etudiant::Column::IdEtudiant",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Etudiant,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::etudiant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Etudiant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
