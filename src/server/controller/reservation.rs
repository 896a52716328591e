use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        reservation::{AnneeUniversitaireDto, AnnulationDto, ReservationDto},
    },
    server::{
        error::AppError, model::reservation::UpsertReservationParams,
        service::reservation::ReservationService, state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

#[derive(Deserialize)]
pub struct IdParams {
    pub id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignationParams {
    pub num_chambre: i64,
    pub cin: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodeParams {
    pub debut_annee: NaiveDate,
    pub fin_annee: NaiveDate,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CinEtudiantParams {
    pub cin_etudiant: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationChambreParams {
    pub id_reservation: String,
    pub id_chambre: i32,
}

/// Create or update a reservation.
///
/// The body must carry `idReservation`. Only the reservation's own columns are
/// written; no capacity check is made. Use
/// `ajouterReservationEtAssignerAChambreEtAEtudiant` to book a room.
///
/// # Returns
/// - `200 OK` - The stored reservation
/// - `400 Bad Request` - Missing `idReservation`
/// - `404 Not Found` - The referenced room does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reservation/addOrUpdate",
    tag = RESERVATION_TAG,
    request_body = ReservationDto,
    responses(
        (status = 200, description = "Stored reservation", body = ReservationDto),
        (status = 400, description = "Missing idReservation", body = ErrorDto),
        (status = 404, description = "Referenced room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_or_update_reservation(
    State(state): State<AppState>,
    Json(payload): Json<ReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db)
        .add_or_update(UpsertReservationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/reservation/findAll",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "All reservations with their students", body = Vec<ReservationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_all_reservations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = ReservationService::new(&state.db).find_all().await?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/reservation/findById",
    tag = RESERVATION_TAG,
    params(
        ("id" = String, Query, description = "Reservation id")
    ),
    responses(
        (status = 200, description = "The reservation", body = ReservationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_reservation_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db)
        .find_by_id(&params.id)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/reservation/delete",
    tag = RESERVATION_TAG,
    request_body = ReservationDto,
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 400, description = "Missing idReservation", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    Json(payload): Json<ReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.id_reservation.is_empty() {
        return Err(AppError::BadRequest(
            "L'identifiant de la réservation est obligatoire".to_string(),
        ));
    }

    ReservationService::new(&state.db)
        .delete_by_id(&payload.id_reservation)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/reservation/deleteById/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = String, Path, description = "Reservation id")
    ),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    ReservationService::new(&state.db).delete_by_id(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Book a room for a student for the current academic year.
///
/// The reservation id is built from the academic year, the bloc name, the room
/// number and the student's cin, e.g. `2023/2024-A-101-12345678`. The booking is
/// refused once the room holds as many valid reservations this year as its type
/// allows (1 for SIMPLE, 2 for DOUBLE, 3 for TRIPLE).
///
/// # Arguments
/// - `num_chambre` - Number of the room
/// - `cin` - National id of the student
///
/// # Returns
/// - `201 Created` - The new reservation with its student
/// - `400 Bad Request` - The room is not in a bloc
/// - `404 Not Found` - Room or student not found
/// - `409 Conflict` - Room full, or the student already holds this room
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reservation/ajouterReservationEtAssignerAChambreEtAEtudiant",
    tag = RESERVATION_TAG,
    params(
        ("numChambre" = i64, Query, description = "Room number"),
        ("cin" = i64, Query, description = "Student national id")
    ),
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 400, description = "Room without bloc", body = ErrorDto),
        (status = 404, description = "Room or student not found", body = ErrorDto),
        (status = 409, description = "Room full or already reserved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ajouter_reservation_et_assigner_a_chambre_et_a_etudiant(
    State(state): State<AppState>,
    Query(params): Query<AssignationParams>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db)
        .ajouter_reservation_et_assigner_a_chambre_et_a_etudiant(params.num_chambre, params.cin)
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// Count the reservations anchored in a date range, bounds included.
#[utoipa::path(
    get,
    path = "/api/reservation/getReservationParAnneeUniversitaire",
    tag = RESERVATION_TAG,
    params(
        ("debutAnnee" = NaiveDate, Query, description = "First day of the range (YYYY-MM-DD)"),
        ("finAnnee" = NaiveDate, Query, description = "Last day of the range (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Number of reservations", body = u64),
        (status = 400, description = "debutAnnee after finAnnee", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation_par_annee_universitaire(
    State(state): State<AppState>,
    Query(params): Query<PeriodeParams>,
) -> Result<impl IntoResponse, AppError> {
    let count = ReservationService::new(&state.db)
        .get_reservation_par_annee_universitaire(params.debut_annee, params.fin_annee)
        .await?;

    Ok((StatusCode::OK, Json(count)))
}

/// Cancel the valid reservation of a student.
///
/// The reservation is detached from its room and deleted.
#[utoipa::path(
    delete,
    path = "/api/reservation/annulerReservation",
    tag = RESERVATION_TAG,
    params(
        ("cinEtudiant" = i64, Query, description = "Student national id")
    ),
    responses(
        (status = 200, description = "Reservation cancelled", body = MessageDto),
        (status = 404, description = "No valid reservation for this student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn annuler_reservation(
    State(state): State<AppState>,
    Query(params): Query<CinEtudiantParams>,
) -> Result<impl IntoResponse, AppError> {
    let message = ReservationService::new(&state.db)
        .annuler_reservation(params.cin_etudiant)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto { message })))
}

#[utoipa::path(
    put,
    path = "/api/reservation/affectReservationAChambre",
    tag = RESERVATION_TAG,
    params(
        ("idReservation" = String, Query, description = "Reservation id"),
        ("idChambre" = i32, Query, description = "Room id")
    ),
    responses(
        (status = 200, description = "Reservation linked to the room", body = ReservationDto),
        (status = 404, description = "Reservation or room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn affect_reservation_a_chambre(
    State(state): State<AppState>,
    Query(params): Query<ReservationChambreParams>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db)
        .affect_reservation_a_chambre(&params.id_reservation, params.id_chambre)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Unlink a reservation from a room.
///
/// The reservation is left as is when it is linked to another room.
#[utoipa::path(
    put,
    path = "/api/reservation/deaffectReservationAChambre",
    tag = RESERVATION_TAG,
    params(
        ("idReservation" = String, Query, description = "Reservation id"),
        ("idChambre" = i32, Query, description = "Room id")
    ),
    responses(
        (status = 200, description = "Reservation after the unlink", body = ReservationDto),
        (status = 404, description = "Reservation or room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deaffect_reservation_a_chambre(
    State(state): State<AppState>,
    Query(params): Query<ReservationChambreParams>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db)
        .deaffect_reservation_a_chambre(&params.id_reservation, params.id_chambre)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Invalidate every valid reservation of the current academic year.
#[utoipa::path(
    put,
    path = "/api/reservation/annulerReservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "Cancelled reservations of the current year", body = AnnulationDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn annuler_reservations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let annulation = ReservationService::new(&state.db)
        .annuler_reservations()
        .await?;

    Ok((StatusCode::OK, Json(annulation.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/reservation/anneeUniversitaire",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "Current academic year", body = AnneeUniversitaireDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn annee_universitaire(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let year = ReservationService::new(&state.db).annee_universitaire()?;

    Ok((StatusCode::OK, Json(year.into_dto())))
}
