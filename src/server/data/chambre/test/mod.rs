use crate::{
    model::chambre::TypeChambre,
    server::{data::chambre::ChambreRepository, model::chambre::UpsertChambreParams},
};
use entity::sea_orm_active_enums::TypeChambre as StoredTypeChambre;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_nom_foyer_and_type;
mod upsert;
