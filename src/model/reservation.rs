use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::etudiant::EtudiantDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    #[serde(default)]
    pub id_reservation: String,
    pub annee_universitaire: NaiveDate,
    #[serde(default)]
    pub est_valide: bool,
    #[serde(default)]
    pub id_chambre: Option<i32>,
    /// Students covered by the reservation. Ignored on input.
    #[serde(default)]
    pub etudiants: Vec<EtudiantDto>,
}

/// Inclusive bounds of an academic year (Sept 15 to Jun 30).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnneeUniversitaireDto {
    pub debut: NaiveDate,
    pub fin: NaiveDate,
}

/// Result of the yearly cancellation sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnulationDto {
    pub annee_universitaire: AnneeUniversitaireDto,
    pub reservations_annulees: u64,
}
