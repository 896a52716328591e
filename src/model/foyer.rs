use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::bloc::BlocDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoyerDto {
    #[serde(default)]
    pub id_foyer: Option<i32>,
    pub nom_foyer: String,
    #[serde(default)]
    pub capacite_foyer: i64,
    /// Blocs of the foyer. Read from the database on output; on input only used by
    /// `ajoutFoyerEtBlocs` and `ajouterFoyerEtAffecterAUniversite`.
    #[serde(default)]
    pub blocs: Vec<BlocDto>,
}
