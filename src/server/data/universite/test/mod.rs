use crate::server::{data::universite::UniversiteRepository, model::universite::UpsertUniversiteParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_nom;
mod set_foyer;
mod upsert;
