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
        bloc::{BlocChambresDto, BlocDto},
        chambre::ChambreDto,
    },
    server::{
        controller::required_id, error::AppError, model::bloc::UpsertBlocParams,
        service::bloc::BlocService, state::AppState,
    },
};

/// Tag for grouping bloc endpoints in OpenAPI documentation
pub static BLOC_TAG: &str = "bloc";

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
pub struct AffecterFoyerParams {
    pub nom_bloc: String,
    pub nom_foyer: String,
}

#[utoipa::path(
    post,
    path = "/api/bloc/addOrUpdate",
    tag = BLOC_TAG,
    request_body = BlocDto,
    responses(
        (status = 200, description = "Stored bloc", body = BlocDto),
        (status = 404, description = "Referenced foyer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_or_update_bloc(
    State(state): State<AppState>,
    Json(payload): Json<BlocDto>,
) -> Result<impl IntoResponse, AppError> {
    let bloc = BlocService::new(&state.db)
        .add_or_update(UpsertBlocParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(bloc.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/bloc/findAll",
    tag = BLOC_TAG,
    responses(
        (status = 200, description = "All blocs", body = Vec<BlocDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_all_blocs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let blocs = BlocService::new(&state.db).find_all().await?;

    let dtos: Vec<BlocDto> = blocs.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/bloc/findById",
    tag = BLOC_TAG,
    params(
        ("id" = i32, Query, description = "Bloc id")
    ),
    responses(
        (status = 200, description = "The bloc", body = BlocDto),
        (status = 404, description = "Bloc not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_bloc_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<impl IntoResponse, AppError> {
    let bloc = BlocService::new(&state.db).find_by_id(params.id).await?;

    Ok((StatusCode::OK, Json(bloc.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/bloc/delete",
    tag = BLOC_TAG,
    request_body = BlocDto,
    responses(
        (status = 204, description = "Bloc deleted"),
        (status = 400, description = "Missing idBloc", body = ErrorDto),
        (status = 404, description = "Bloc not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bloc(
    State(state): State<AppState>,
    Json(payload): Json<BlocDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = required_id(payload.id_bloc, "le bloc")?;

    BlocService::new(&state.db).delete_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/bloc/deleteById",
    tag = BLOC_TAG,
    params(
        ("id" = i32, Query, description = "Bloc id")
    ),
    responses(
        (status = 204, description = "Bloc deleted"),
        (status = 404, description = "Bloc not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bloc_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<impl IntoResponse, AppError> {
    BlocService::new(&state.db).delete_by_id(params.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Move rooms into a bloc.
///
/// Rooms are matched by number; unknown numbers are skipped. Rooms already in another
/// bloc are moved.
///
/// # Arguments
/// - `nom_bloc` - Name of the receiving bloc
/// - `payload` - Room numbers to move
///
/// # Returns
/// - `200 OK` - The bloc with all of its rooms
/// - `404 Not Found` - No bloc with this name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/bloc/affecterChambresABloc",
    tag = BLOC_TAG,
    params(
        ("nomBloc" = String, Query, description = "Name of the receiving bloc")
    ),
    request_body = Vec<i64>,
    responses(
        (status = 200, description = "Bloc with its rooms", body = BlocChambresDto),
        (status = 404, description = "Bloc not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn affecter_chambres_a_bloc(
    State(state): State<AppState>,
    Query(params): Query<NomBlocParams>,
    Json(payload): Json<Vec<i64>>,
) -> Result<impl IntoResponse, AppError> {
    let bloc = BlocService::new(&state.db)
        .affecter_chambres_a_bloc(&payload, &params.nom_bloc)
        .await?;

    Ok((StatusCode::OK, Json(bloc.into_dto())))
}

/// Detach rooms from their bloc.
#[utoipa::path(
    put,
    path = "/api/bloc/desaffecterChambresABloc",
    tag = BLOC_TAG,
    request_body = Vec<i64>,
    responses(
        (status = 200, description = "Detached rooms", body = Vec<ChambreDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn desaffecter_chambres_a_bloc(
    State(state): State<AppState>,
    Json(payload): Json<Vec<i64>>,
) -> Result<impl IntoResponse, AppError> {
    let chambres = BlocService::new(&state.db)
        .desaffecter_chambres_a_bloc(&payload)
        .await?;

    let dtos: Vec<ChambreDto> = chambres.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    put,
    path = "/api/bloc/affecterBlocAFoyer",
    tag = BLOC_TAG,
    params(
        ("nomBloc" = String, Query, description = "Bloc name"),
        ("nomFoyer" = String, Query, description = "Foyer name")
    ),
    responses(
        (status = 200, description = "Bloc linked to the foyer", body = BlocDto),
        (status = 404, description = "Bloc or foyer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn affecter_bloc_a_foyer(
    State(state): State<AppState>,
    Query(params): Query<AffecterFoyerParams>,
) -> Result<impl IntoResponse, AppError> {
    let bloc = BlocService::new(&state.db)
        .affecter_bloc_a_foyer(&params.nom_bloc, &params.nom_foyer)
        .await?;

    Ok((StatusCode::OK, Json(bloc.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/bloc/desaffecterBlocAFoyer",
    tag = BLOC_TAG,
    params(
        ("nomBloc" = String, Query, description = "Bloc name")
    ),
    responses(
        (status = 200, description = "Bloc without foyer", body = BlocDto),
        (status = 404, description = "Bloc not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn desaffecter_bloc_a_foyer(
    State(state): State<AppState>,
    Query(params): Query<NomBlocParams>,
) -> Result<impl IntoResponse, AppError> {
    let bloc = BlocService::new(&state.db)
        .desaffecter_bloc_a_foyer(&params.nom_bloc)
        .await?;

    Ok((StatusCode::OK, Json(bloc.into_dto())))
}
