use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, universite::UniversiteDto},
    server::{
        controller::required_id,
        error::AppError,
        model::universite::{CreateUniversiteWithFoyerParams, UpsertUniversiteParams},
        service::universite::UniversiteService,
        state::AppState,
    },
};

/// Tag for grouping university endpoints in OpenAPI documentation
pub static UNIVERSITE_TAG: &str = "universite";

#[derive(Deserialize)]
pub struct IdParams {
    pub id: i32,
}

/// Create or update a university.
///
/// Updates the university when `idUniversite` matches an existing row, creates it
/// otherwise. The nested foyer, when present, is linked by its `idFoyer` and detached
/// from any other university.
///
/// # Returns
/// - `200 OK` - The stored university
/// - `404 Not Found` - The referenced foyer does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/universite/addOrUpdate",
    tag = UNIVERSITE_TAG,
    request_body = UniversiteDto,
    responses(
        (status = 200, description = "Stored university", body = UniversiteDto),
        (status = 404, description = "Referenced foyer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_or_update_universite(
    State(state): State<AppState>,
    Json(payload): Json<UniversiteDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UniversiteService::new(&state.db);

    let universite = service
        .add_or_update(UpsertUniversiteParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(universite.into_dto())))
}

/// List all universities with their foyer.
#[utoipa::path(
    get,
    path = "/api/universite/findAll",
    tag = UNIVERSITE_TAG,
    responses(
        (status = 200, description = "All universities", body = Vec<UniversiteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_all_universites(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let universites = UniversiteService::new(&state.db).find_all().await?;

    let dtos: Vec<UniversiteDto> = universites.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/universite/findById",
    tag = UNIVERSITE_TAG,
    params(
        ("id" = i32, Query, description = "University id")
    ),
    responses(
        (status = 200, description = "The university", body = UniversiteDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_universite_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<impl IntoResponse, AppError> {
    let universite = UniversiteService::new(&state.db)
        .find_by_id(params.id)
        .await?;

    Ok((StatusCode::OK, Json(universite.into_dto())))
}

/// Delete the university carried in the request body.
///
/// Only `idUniversite` is used; the body must carry it.
#[utoipa::path(
    delete,
    path = "/api/universite/delete",
    tag = UNIVERSITE_TAG,
    request_body = UniversiteDto,
    responses(
        (status = 204, description = "University deleted"),
        (status = 400, description = "Missing idUniversite", body = ErrorDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_universite(
    State(state): State<AppState>,
    Json(payload): Json<UniversiteDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = required_id(payload.id_universite, "l'université")?;

    UniversiteService::new(&state.db).delete_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/universite/deleteById",
    tag = UNIVERSITE_TAG,
    params(
        ("id" = i32, Query, description = "University id")
    ),
    responses(
        (status = 204, description = "University deleted"),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_universite_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<impl IntoResponse, AppError> {
    UniversiteService::new(&state.db)
        .delete_by_id(params.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Create a university together with its foyer.
///
/// The nested foyer and its blocs are created first and the new university is
/// linked to the new foyer. Identifiers in the body are ignored.
///
/// # Returns
/// - `201 Created` - The new university with its foyer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/universite/ajouterUniversiteEtSonFoyer",
    tag = UNIVERSITE_TAG,
    request_body = UniversiteDto,
    responses(
        (status = 201, description = "University and foyer created", body = UniversiteDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ajouter_universite_et_son_foyer(
    State(state): State<AppState>,
    Json(payload): Json<UniversiteDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UniversiteService::new(&state.db);

    // Convert DTO to server model
    let params = CreateUniversiteWithFoyerParams::from_dto(payload);

    let universite = service.ajouter_universite_et_son_foyer(params).await?;

    Ok((StatusCode::CREATED, Json(universite.into_dto())))
}
