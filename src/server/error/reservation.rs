use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, chambre::TypeChambre};

/// Failures of the reservation workflows.
///
/// Each failure has its own kind so callers can tell an unknown room from a full one.
#[derive(Error, Debug)]
pub enum ReservationError {
    /// No room carries the requested number.
    #[error("Chambre {0} introuvable")]
    RoomNotFound(i64),

    /// No student carries the requested national id.
    #[error("Etudiant avec le cin {0} introuvable")]
    StudentNotFound(i64),

    /// The room is not attached to a bloc, so no reservation id can be built.
    #[error("La chambre {0} n'est affectée à aucun bloc")]
    RoomWithoutBloc(i64),

    /// The room already holds as many valid reservations as its type allows.
    #[error("Chambre {type_c} {numero_chambre} remplie")]
    RoomFull {
        numero_chambre: i64,
        type_c: TypeChambre,
    },

    /// The student already holds this room for the current academic year.
    #[error("La réservation {0} existe déjà")]
    AlreadyReserved(String),

    /// The student has no valid reservation to cancel.
    #[error("Aucune réservation valide pour le cin {0}")]
    NoActiveReservation(i64),
}

/// Converts reservation errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - Unknown room, student or active reservation
/// - 400 Bad Request - Room without bloc
/// - 409 Conflict - Room full or reservation already present
impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::RoomNotFound(_) | Self::StudentNotFound(_) | Self::NoActiveReservation(_) => {
                StatusCode::NOT_FOUND
            }
            Self::RoomWithoutBloc(_) => StatusCode::BAD_REQUEST,
            Self::RoomFull { .. } | Self::AlreadyReserved(_) => StatusCode::CONFLICT,
        };

        tracing::debug!("Reservation rejected: {}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
