//! Data transfer objects exchanged over the REST API.
//!
//! Every DTO serializes with camelCase keys (`idChambre`, `estValide`, ...) and dates
//! as ISO `YYYY-MM-DD` strings. Identifiers are optional on entity DTOs because the
//! same body is used by the `addOrUpdate` endpoints for both creation and update.

pub mod api;
pub mod bloc;
pub mod chambre;
pub mod etudiant;
pub mod foyer;
pub mod reservation;
pub mod universite;
