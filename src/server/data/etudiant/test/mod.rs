use crate::server::{data::etudiant::EtudiantRepository, model::etudiant::UpsertEtudiantParams};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete_by_id;
mod link_reservation;
mod upsert;
