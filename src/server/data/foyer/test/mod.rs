use crate::server::{
    data::foyer::FoyerRepository,
    model::{
        bloc::UpsertBlocParams,
        foyer::{CreateFoyerWithBlocsParams, UpsertFoyerParams},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_with_blocs;
mod delete_by_id;
mod find_by_nom;
mod upsert;
