use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::chambre::ChambreDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlocDto {
    #[serde(default)]
    pub id_bloc: Option<i32>,
    pub nom_bloc: String,
    #[serde(default)]
    pub capacite_bloc: i64,
    #[serde(default)]
    pub id_foyer: Option<i32>,
}

/// A bloc together with its rooms, as produced by the per-bloc room listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlocChambresDto {
    pub id_bloc: i32,
    pub nom_bloc: String,
    pub capacite_bloc: i64,
    pub chambres: Vec<ChambreDto>,
}
