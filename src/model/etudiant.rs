use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EtudiantDto {
    #[serde(default)]
    pub id_etudiant: Option<i32>,
    pub nom_et: String,
    pub prenom_et: String,
    pub cin: i64,
    #[serde(default)]
    pub ecole: String,
    pub date_naissance: NaiveDate,
    /// Identifiers of the reservations covering this student. Ignored on input and
    /// left empty when the student is nested inside a reservation.
    #[serde(default)]
    pub reservations: Vec<String>,
}
