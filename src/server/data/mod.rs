//! Database repository layer for all housing entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity. Repositories use SeaORM entity models internally and return domain models to
//! maintain separation between the data layer and business logic layer. All database
//! queries, inserts, updates, and deletes are performed through these repositories.

pub mod bloc;
pub mod chambre;
pub mod etudiant;
pub mod foyer;
pub mod reservation;
pub mod universite;
