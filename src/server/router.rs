use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{bloc, chambre, etudiant, foyer, reservation, universite},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Housing API", description = "University housing management"),
    tags(
        (name = "universite", description = "Universities"),
        (name = "foyer", description = "Dormitories"),
        (name = "bloc", description = "Blocks of a dormitory"),
        (name = "chambre", description = "Rooms"),
        (name = "etudiant", description = "Students"),
        (name = "reservation", description = "Room reservations")
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document with Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(universite_routes())
        .merge(foyer_routes())
        .merge(bloc_routes())
        .merge(chambre_routes())
        .merge(etudiant_routes())
        .merge(reservation_routes())
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

fn universite_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(universite::add_or_update_universite))
        .routes(routes!(universite::find_all_universites))
        .routes(routes!(universite::find_universite_by_id))
        .routes(routes!(universite::delete_universite))
        .routes(routes!(universite::delete_universite_by_id))
        .routes(routes!(universite::ajouter_universite_et_son_foyer))
}

fn foyer_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(foyer::add_or_update_foyer))
        .routes(routes!(foyer::find_all_foyers))
        .routes(routes!(foyer::find_foyer_by_id))
        .routes(routes!(foyer::delete_foyer))
        .routes(routes!(foyer::delete_foyer_by_id))
        .routes(routes!(foyer::affecter_foyer_a_universite))
        .routes(routes!(foyer::affecter_foyer_a_universite_par_id))
        .routes(routes!(foyer::desaffecter_foyer_a_universite))
        .routes(routes!(foyer::ajout_foyer_et_blocs))
        .routes(routes!(foyer::ajouter_foyer_et_affecter_a_universite))
}

fn bloc_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(bloc::add_or_update_bloc))
        .routes(routes!(bloc::find_all_blocs))
        .routes(routes!(bloc::find_bloc_by_id))
        .routes(routes!(bloc::delete_bloc))
        .routes(routes!(bloc::delete_bloc_by_id))
        .routes(routes!(bloc::affecter_chambres_a_bloc))
        .routes(routes!(bloc::desaffecter_chambres_a_bloc))
        .routes(routes!(bloc::affecter_bloc_a_foyer))
        .routes(routes!(bloc::desaffecter_bloc_a_foyer))
}

fn chambre_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(chambre::add_or_update_chambre))
        .routes(routes!(chambre::find_all_chambres))
        .routes(routes!(chambre::find_chambre_by_id))
        .routes(routes!(chambre::delete_chambre))
        .routes(routes!(chambre::delete_chambre_by_id))
        .routes(routes!(chambre::get_chambres_par_nom_bloc))
        .routes(routes!(chambre::nb_chambre_par_type_et_bloc))
        .routes(routes!(
            chambre::get_chambres_non_reserve_par_nom_foyer_et_type_chambre
        ))
        .routes(routes!(chambre::liste_chambres_par_bloc))
        .routes(routes!(chambre::pourcentage_chambre_par_type_chambre))
        .routes(routes!(
            chambre::nb_places_disponible_par_chambre_annee_en_cours
        ))
}

fn etudiant_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(etudiant::add_or_update_etudiant))
        .routes(routes!(etudiant::find_all_etudiants))
        .routes(routes!(etudiant::find_etudiant_by_id))
        .routes(routes!(etudiant::delete_etudiant))
        .routes(routes!(etudiant::delete_etudiant_by_id))
        .routes(routes!(etudiant::find_by_nom_et))
        .routes(routes!(etudiant::affecter_reservation_a_etudiant))
        .routes(routes!(etudiant::desaffecter_reservation_a_etudiant))
}

fn reservation_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(reservation::add_or_update_reservation))
        .routes(routes!(reservation::find_all_reservations))
        .routes(routes!(reservation::find_reservation_by_id))
        .routes(routes!(reservation::delete_reservation))
        .routes(routes!(reservation::delete_reservation_by_id))
        .routes(routes!(
            reservation::ajouter_reservation_et_assigner_a_chambre_et_a_etudiant
        ))
        .routes(routes!(reservation::get_reservation_par_annee_universitaire))
        .routes(routes!(reservation::annuler_reservation))
        .routes(routes!(reservation::affect_reservation_a_chambre))
        .routes(routes!(reservation::deaffect_reservation_a_chambre))
        .routes(routes!(reservation::annuler_reservations))
        .routes(routes!(reservation::annee_universitaire))
}
