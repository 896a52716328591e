//! SeaORM entity models for the housing schema.
//!
//! One module per table. The `prelude` re-exports every `Entity` under its
//! table-level name so callers can write `Chambre::find()`.

pub mod prelude;

pub mod bloc;
pub mod chambre;
pub mod etudiant;
pub mod foyer;
pub mod reservation;
pub mod reservation_etudiant;
pub mod sea_orm_active_enums;
pub mod universite;
