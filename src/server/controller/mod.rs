//! HTTP request handlers.
//!
//! Every entity has its own module exposing `/api/{entity}/{operation}` handlers. Handlers
//! convert DTOs into domain params, call the matching service and convert the result
//! back into a DTO. Errors are returned as `AppError` and rendered by its
//! `IntoResponse` implementation.

use crate::server::error::AppError;

pub mod bloc;
pub mod chambre;
pub mod etudiant;
pub mod foyer;
pub mod reservation;
pub mod universite;

/// Extracts the identifier of an entity body sent to a `delete` endpoint.
fn required_id<T>(id: Option<T>, entity: &str) -> Result<T, AppError> {
    id.ok_or_else(|| AppError::BadRequest(format!("L'identifiant de {} est obligatoire", entity)))
}
