use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, foyer::FoyerDto, universite::UniversiteDto},
    server::{
        controller::required_id,
        error::AppError,
        model::foyer::{CreateFoyerWithBlocsParams, UpsertFoyerParams},
        service::foyer::FoyerService,
        state::AppState,
    },
};

/// Tag for grouping foyer endpoints in OpenAPI documentation
pub static FOYER_TAG: &str = "foyer";

#[derive(Deserialize)]
pub struct IdParams {
    pub id: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffecterUniversiteParams {
    pub id_foyer: i32,
    pub nom_universite: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversiteIdParams {
    pub id_universite: i32,
}

/// Create or update a foyer.
///
/// Only the foyer's own columns are written; nested blocs in the body are ignored.
/// Use `ajoutFoyerEtBlocs` to create a foyer with its blocs.
#[utoipa::path(
    post,
    path = "/api/foyer/addOrUpdate",
    tag = FOYER_TAG,
    request_body = FoyerDto,
    responses(
        (status = 200, description = "Stored foyer", body = FoyerDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_or_update_foyer(
    State(state): State<AppState>,
    Json(payload): Json<FoyerDto>,
) -> Result<impl IntoResponse, AppError> {
    let foyer = FoyerService::new(&state.db)
        .add_or_update(UpsertFoyerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(foyer.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/foyer/findAll",
    tag = FOYER_TAG,
    responses(
        (status = 200, description = "All foyers with their blocs", body = Vec<FoyerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_all_foyers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let foyers = FoyerService::new(&state.db).find_all().await?;

    let dtos: Vec<FoyerDto> = foyers.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/foyer/findById",
    tag = FOYER_TAG,
    params(
        ("id" = i32, Query, description = "Foyer id")
    ),
    responses(
        (status = 200, description = "The foyer with its blocs", body = FoyerDto),
        (status = 404, description = "Foyer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_foyer_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<impl IntoResponse, AppError> {
    let foyer = FoyerService::new(&state.db).find_by_id(params.id).await?;

    Ok((StatusCode::OK, Json(foyer.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/foyer/delete",
    tag = FOYER_TAG,
    request_body = FoyerDto,
    responses(
        (status = 204, description = "Foyer deleted"),
        (status = 400, description = "Missing idFoyer", body = ErrorDto),
        (status = 404, description = "Foyer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_foyer(
    State(state): State<AppState>,
    Json(payload): Json<FoyerDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = required_id(payload.id_foyer, "le foyer")?;

    FoyerService::new(&state.db).delete_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/foyer/deleteById",
    tag = FOYER_TAG,
    params(
        ("id" = i32, Query, description = "Foyer id")
    ),
    responses(
        (status = 204, description = "Foyer deleted"),
        (status = 404, description = "Foyer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_foyer_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<impl IntoResponse, AppError> {
    FoyerService::new(&state.db).delete_by_id(params.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Link a foyer to a university found by name.
///
/// The foyer is detached from the university that held it before, if any.
///
/// # Arguments
/// - `id_foyer` - Foyer to link
/// - `nom_universite` - Name of the university receiving the foyer
///
/// # Returns
/// - `200 OK` - The university with its new foyer
/// - `404 Not Found` - Foyer or university not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/foyer/affecterFoyerAUniversite",
    tag = FOYER_TAG,
    params(
        ("idFoyer" = i32, Query, description = "Foyer id"),
        ("nomUniversite" = String, Query, description = "University name")
    ),
    responses(
        (status = 200, description = "University with its foyer", body = UniversiteDto),
        (status = 404, description = "Foyer or university not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn affecter_foyer_a_universite(
    State(state): State<AppState>,
    Query(params): Query<AffecterUniversiteParams>,
) -> Result<impl IntoResponse, AppError> {
    let universite = FoyerService::new(&state.db)
        .affecter_foyer_a_universite(params.id_foyer, &params.nom_universite)
        .await?;

    Ok((StatusCode::OK, Json(universite.into_dto())))
}

/// Link a foyer to a university, both given by id.
#[utoipa::path(
    put,
    path = "/api/foyer/affecterFoyerAUniversite/{id_foyer}/{id_universite}",
    tag = FOYER_TAG,
    params(
        ("id_foyer" = i32, Path, description = "Foyer id"),
        ("id_universite" = i32, Path, description = "University id")
    ),
    responses(
        (status = 200, description = "University with its foyer", body = UniversiteDto),
        (status = 404, description = "Foyer or university not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn affecter_foyer_a_universite_par_id(
    State(state): State<AppState>,
    Path((id_foyer, id_universite)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let universite = FoyerService::new(&state.db)
        .affecter_foyer_a_universite_par_id(id_foyer, id_universite)
        .await?;

    Ok((StatusCode::OK, Json(universite.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/foyer/desaffecterFoyerAUniversite",
    tag = FOYER_TAG,
    params(
        ("idUniversite" = i32, Query, description = "University id")
    ),
    responses(
        (status = 200, description = "University without foyer", body = UniversiteDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn desaffecter_foyer_a_universite(
    State(state): State<AppState>,
    Query(params): Query<UniversiteIdParams>,
) -> Result<impl IntoResponse, AppError> {
    let universite = FoyerService::new(&state.db)
        .desaffecter_foyer_a_universite(params.id_universite)
        .await?;

    Ok((StatusCode::OK, Json(universite.into_dto())))
}

/// Create a foyer together with its nested blocs.
#[utoipa::path(
    post,
    path = "/api/foyer/ajoutFoyerEtBlocs",
    tag = FOYER_TAG,
    request_body = FoyerDto,
    responses(
        (status = 201, description = "Foyer and blocs created", body = FoyerDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ajout_foyer_et_blocs(
    State(state): State<AppState>,
    Json(payload): Json<FoyerDto>,
) -> Result<impl IntoResponse, AppError> {
    let foyer = FoyerService::new(&state.db)
        .ajout_foyer_et_blocs(CreateFoyerWithBlocsParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(foyer.into_dto())))
}

/// Create a foyer with its blocs and link it to an existing university.
///
/// Nothing is created when the university does not exist.
#[utoipa::path(
    post,
    path = "/api/foyer/ajouterFoyerEtAffecterAUniversite",
    tag = FOYER_TAG,
    params(
        ("idUniversite" = i32, Query, description = "University receiving the foyer")
    ),
    request_body = FoyerDto,
    responses(
        (status = 201, description = "Foyer created and linked", body = FoyerDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ajouter_foyer_et_affecter_a_universite(
    State(state): State<AppState>,
    Query(params): Query<UniversiteIdParams>,
    Json(payload): Json<FoyerDto>,
) -> Result<impl IntoResponse, AppError> {
    let foyer = FoyerService::new(&state.db)
        .ajouter_foyer_et_affecter_a_universite(
            CreateFoyerWithBlocsParams::from_dto(payload),
            params.id_universite,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(foyer.into_dto())))
}
