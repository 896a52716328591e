//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! housing entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod bloc;
pub mod chambre;
pub mod etudiant;
pub mod foyer;
pub mod reservation;
pub mod universite;
