use crate::server::{
    data::reservation::ReservationRepository,
    model::reservation::{CreateReservationParams, UpsertReservationParams},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create;
mod find_valid_by_cin;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
