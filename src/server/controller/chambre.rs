use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        bloc::BlocChambresDto,
        chambre::{ChambreDto, PlacesDisponiblesDto, TypeChambre, TypeChambrePourcentageDto},
    },
    server::{
        controller::required_id, error::AppError, model::chambre::UpsertChambreParams,
        service::chambre::ChambreService, state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static CHAMBRE_TAG: &str = "chambre";

#[derive(Deserialize)]
pub struct IdParams {
    pub id: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NomBlocParams {
    pub nom_bloc: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeEtBlocParams {
    #[serde(rename = "type")]
    pub type_c: TypeChambre,
    pub id_bloc: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoyerEtTypeParams {
    pub nom_foyer: String,
    #[serde(rename = "type")]
    pub type_c: TypeChambre,
}

/// Create or update a room.
///
/// Room numbers are unique; reusing the number of another room is rejected.
///
/// # Returns
/// - `200 OK` - The stored room
/// - `400 Bad Request` - Another room already uses this number
/// - `404 Not Found` - The referenced bloc does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/chambre/addOrUpdate",
    tag = CHAMBRE_TAG,
    request_body = ChambreDto,
    responses(
        (status = 200, description = "Stored room", body = ChambreDto),
        (status = 400, description = "Room number already used", body = ErrorDto),
        (status = 404, description = "Referenced bloc not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_or_update_chambre(
    State(state): State<AppState>,
    Json(payload): Json<ChambreDto>,
) -> Result<impl IntoResponse, AppError> {
    let chambre = ChambreService::new(&state.db)
        .add_or_update(UpsertChambreParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(chambre.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/chambre/findAll",
    tag = CHAMBRE_TAG,
    responses(
        (status = 200, description = "All rooms", body = Vec<ChambreDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_all_chambres(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let chambres = ChambreService::new(&state.db).find_all().await?;

    let dtos: Vec<ChambreDto> = chambres.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/chambre/findById",
    tag = CHAMBRE_TAG,
    params(
        ("id" = i32, Query, description = "Room id")
    ),
    responses(
        (status = 200, description = "The room", body = ChambreDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_chambre_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<impl IntoResponse, AppError> {
    let chambre = ChambreService::new(&state.db).find_by_id(params.id).await?;

    Ok((StatusCode::OK, Json(chambre.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/chambre/delete",
    tag = CHAMBRE_TAG,
    request_body = ChambreDto,
    responses(
        (status = 204, description = "Room deleted"),
        (status = 400, description = "Missing idChambre", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_chambre(
    State(state): State<AppState>,
    Json(payload): Json<ChambreDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = required_id(payload.id_chambre, "la chambre")?;

    ChambreService::new(&state.db).delete_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/chambre/deleteById",
    tag = CHAMBRE_TAG,
    params(
        ("id" = i32, Query, description = "Room id")
    ),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_chambre_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<impl IntoResponse, AppError> {
    ChambreService::new(&state.db).delete_by_id(params.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/chambre/getChambresParNomBloc",
    tag = CHAMBRE_TAG,
    params(
        ("nomBloc" = String, Query, description = "Bloc name")
    ),
    responses(
        (status = 200, description = "Rooms of the bloc", body = Vec<ChambreDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chambres_par_nom_bloc(
    State(state): State<AppState>,
    Query(params): Query<NomBlocParams>,
) -> Result<impl IntoResponse, AppError> {
    let chambres = ChambreService::new(&state.db)
        .get_chambres_par_nom_bloc(&params.nom_bloc)
        .await?;

    let dtos: Vec<ChambreDto> = chambres.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Count the rooms of a type in a bloc.
#[utoipa::path(
    get,
    path = "/api/chambre/nbChambreParTypeEtBloc",
    tag = CHAMBRE_TAG,
    params(
        ("type" = TypeChambre, Query, description = "Room type"),
        ("idBloc" = i32, Query, description = "Bloc id")
    ),
    responses(
        (status = 200, description = "Number of rooms", body = u64),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn nb_chambre_par_type_et_bloc(
    State(state): State<AppState>,
    Query(params): Query<TypeEtBlocParams>,
) -> Result<impl IntoResponse, AppError> {
    let count = ChambreService::new(&state.db)
        .nb_chambre_par_type_et_bloc(params.type_c, params.id_bloc)
        .await?;

    Ok((StatusCode::OK, Json(count)))
}

/// Rooms of a type in a foyer without any valid reservation this academic year.
///
/// # Arguments
/// - `nom_foyer` - Foyer whose blocs are searched
/// - `type_c` - Room type to match
///
/// # Returns
/// - `200 OK` - Free rooms, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/chambre/getChambresNonReserveParNomFoyerEtTypeChambre",
    tag = CHAMBRE_TAG,
    params(
        ("nomFoyer" = String, Query, description = "Foyer name"),
        ("type" = TypeChambre, Query, description = "Room type")
    ),
    responses(
        (status = 200, description = "Rooms without reservation", body = Vec<ChambreDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chambres_non_reserve_par_nom_foyer_et_type_chambre(
    State(state): State<AppState>,
    Query(params): Query<FoyerEtTypeParams>,
) -> Result<impl IntoResponse, AppError> {
    let chambres = ChambreService::new(&state.db)
        .get_chambres_non_reserve_par_nom_foyer_et_type_chambre(&params.nom_foyer, params.type_c)
        .await?;

    let dtos: Vec<ChambreDto> = chambres.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Rooms of every bloc.
///
/// Same listing as the one refreshed and logged by the scheduler.
#[utoipa::path(
    get,
    path = "/api/chambre/listeChambresParBloc",
    tag = CHAMBRE_TAG,
    responses(
        (status = 200, description = "Rooms grouped by bloc", body = Vec<BlocChambresDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn liste_chambres_par_bloc(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let blocs = ChambreService::new(&state.db)
        .liste_chambres_par_bloc()
        .await?;

    let dtos: Vec<BlocChambresDto> = blocs.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/chambre/pourcentageChambreParTypeChambre",
    tag = CHAMBRE_TAG,
    responses(
        (status = 200, description = "Share of each room type", body = Vec<TypeChambrePourcentageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pourcentage_chambre_par_type_chambre(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let pourcentages = ChambreService::new(&state.db)
        .pourcentage_chambre_par_type_chambre()
        .await?;

    let dtos: Vec<TypeChambrePourcentageDto> =
        pourcentages.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/chambre/nbPlacesDisponibleParChambreAnneeEnCours",
    tag = CHAMBRE_TAG,
    responses(
        (status = 200, description = "Remaining places per room", body = Vec<PlacesDisponiblesDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn nb_places_disponible_par_chambre_annee_en_cours(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let places = ChambreService::new(&state.db)
        .nb_places_disponible_par_chambre_annee_en_cours()
        .await?;

    let dtos: Vec<PlacesDisponiblesDto> = places.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
