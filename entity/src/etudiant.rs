use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "etudiant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_etudiant: i32,
    pub nom_et: String,
    pub prenom_et: String,
    #[sea_orm(unique)]
    pub cin: i64,
    pub ecole: String,
    pub date_naissance: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation_etudiant::Entity")]
    ReservationEtudiant,
}

impl Related<super::reservation_etudiant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservationEtudiant.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        super::reservation_etudiant::Relation::Reservation.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::reservation_etudiant::Relation::Etudiant.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
