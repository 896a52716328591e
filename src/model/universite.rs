use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::foyer::FoyerDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UniversiteDto {
    #[serde(default)]
    pub id_universite: Option<i32>,
    pub nom_universite: String,
    #[serde(default)]
    pub adresse: String,
    /// On `addOrUpdate` only `foyer.idFoyer` is read, to link an existing foyer.
    /// `ajouterUniversiteEtSonFoyer` creates the nested foyer instead.
    #[serde(default)]
    pub foyer: Option<FoyerDto>,
}
