use crate::server::{data::bloc::BlocRepository, model::bloc::UpsertBlocParams};
use entity::sea_orm_active_enums::TypeChambre;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_all_with_chambres;
mod upsert;
