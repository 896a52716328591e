use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, etudiant::EtudiantDto},
    server::{
        controller::required_id, error::AppError, model::etudiant::UpsertEtudiantParams,
        service::etudiant::EtudiantService, state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static ETUDIANT_TAG: &str = "etudiant";

#[derive(Deserialize)]
pub struct IdParams {
    pub id: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NomEtParams {
    pub nom_et: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationEtudiantParams {
    pub id_reservation: String,
    pub nom_et: String,
    pub prenom_et: String,
}

/// Create or update a student.
///
/// The `cin` is unique across students. The `reservations` list of the body is
/// ignored; links are managed with `affecterReservationAEtudiant`.
#[utoipa::path(
    post,
    path = "/api/etudiant/addOrUpdate",
    tag = ETUDIANT_TAG,
    request_body = EtudiantDto,
    responses(
        (status = 200, description = "Stored student", body = EtudiantDto),
        (status = 400, description = "cin already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_or_update_etudiant(
    State(state): State<AppState>,
    Json(payload): Json<EtudiantDto>,
) -> Result<impl IntoResponse, AppError> {
    let etudiant = EtudiantService::new(&state.db)
        .add_or_update(UpsertEtudiantParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(etudiant.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/etudiant/findAll",
    tag = ETUDIANT_TAG,
    responses(
        (status = 200, description = "All students", body = Vec<EtudiantDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_all_etudiants(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let etudiants = EtudiantService::new(&state.db).find_all().await?;

    let dtos: Vec<EtudiantDto> = etudiants.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/etudiant/findById",
    tag = ETUDIANT_TAG,
    params(
        ("id" = i32, Query, description = "Student id")
    ),
    responses(
        (status = 200, description = "The student", body = EtudiantDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_etudiant_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<impl IntoResponse, AppError> {
    let etudiant = EtudiantService::new(&state.db).find_by_id(params.id).await?;

    Ok((StatusCode::OK, Json(etudiant.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/etudiant/delete",
    tag = ETUDIANT_TAG,
    request_body = EtudiantDto,
    responses(
        (status = 204, description = "Student deleted"),
        (status = 400, description = "Missing idEtudiant", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_etudiant(
    State(state): State<AppState>,
    Json(payload): Json<EtudiantDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = required_id(payload.id_etudiant, "l'étudiant")?;

    EtudiantService::new(&state.db).delete_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/etudiant/deleteById",
    tag = ETUDIANT_TAG,
    params(
        ("id" = i32, Query, description = "Student id")
    ),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_etudiant_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<impl IntoResponse, AppError> {
    EtudiantService::new(&state.db).delete_by_id(params.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/etudiant/findByNomEt",
    tag = ETUDIANT_TAG,
    params(
        ("nomEt" = String, Query, description = "Student last name")
    ),
    responses(
        (status = 200, description = "Students with this last name", body = Vec<EtudiantDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_by_nom_et(
    State(state): State<AppState>,
    Query(params): Query<NomEtParams>,
) -> Result<impl IntoResponse, AppError> {
    let etudiants = EtudiantService::new(&state.db)
        .find_by_nom_et(&params.nom_et)
        .await?;

    let dtos: Vec<EtudiantDto> = etudiants.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Add a reservation to a student found by first and last name.
///
/// Linking a reservation the student already holds changes nothing.
///
/// # Returns
/// - `200 OK` - The student with its reservations
/// - `404 Not Found` - Student or reservation not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/etudiant/affecterReservationAEtudiant",
    tag = ETUDIANT_TAG,
    params(
        ("idReservation" = String, Query, description = "Reservation id"),
        ("nomEt" = String, Query, description = "Student last name"),
        ("prenomEt" = String, Query, description = "Student first name")
    ),
    responses(
        (status = 200, description = "Student with its reservations", body = EtudiantDto),
        (status = 404, description = "Student or reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn affecter_reservation_a_etudiant(
    State(state): State<AppState>,
    Query(params): Query<ReservationEtudiantParams>,
) -> Result<impl IntoResponse, AppError> {
    let etudiant = EtudiantService::new(&state.db)
        .affecter_reservation_a_etudiant(&params.id_reservation, &params.nom_et, &params.prenom_et)
        .await?;

    Ok((StatusCode::OK, Json(etudiant.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/etudiant/desaffecterReservationAEtudiant",
    tag = ETUDIANT_TAG,
    params(
        ("idReservation" = String, Query, description = "Reservation id"),
        ("nomEt" = String, Query, description = "Student last name"),
        ("prenomEt" = String, Query, description = "Student first name")
    ),
    responses(
        (status = 200, description = "Student with its remaining reservations", body = EtudiantDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn desaffecter_reservation_a_etudiant(
    State(state): State<AppState>,
    Query(params): Query<ReservationEtudiantParams>,
) -> Result<impl IntoResponse, AppError> {
    let etudiant = EtudiantService::new(&state.db)
        .desaffecter_reservation_a_etudiant(&params.id_reservation, &params.nom_et, &params.prenom_et)
        .await?;

    Ok((StatusCode::OK, Json(etudiant.into_dto())))
}
