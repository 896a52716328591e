use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_reservation: String,
    /// Day the reservation was made; anchors it to an academic year.
    pub annee_universitaire: Date,
    pub est_valide: bool,
    pub chambre_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::chambre::Entity",
        from = "Column::ChambreId",
        to = "super::chambre::Column::IdChambre",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Chambre,
    #[sea_orm(has_many = "super::reservation_etudiant::Entity")]
    ReservationEtudiant,
}

impl Related<super::chambre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chambre.def()
    }
}

impl Related<super::reservation_etudiant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservationEtudiant.def()
    }
}

impl Related<super::etudiant::Entity> for Entity {
    fn to() -> RelationDef {
        super::reservation_etudiant::Relation::Etudiant.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::reservation_etudiant::Relation::Reservation.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
