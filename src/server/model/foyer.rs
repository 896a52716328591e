//! Foyer domain models and parameters.
//!
//! A foyer is always returned together with its blocs. Creation parameters can carry
//! nested blocs for the operations that build a foyer and its blocs in one call.

use crate::{
    model::foyer::FoyerDto,
    server::model::bloc::{Bloc, UpsertBlocParams},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Foyer {
    pub id_foyer: i32,
    pub nom_foyer: String,
    pub capacite_foyer: i64,
    pub blocs: Vec<Bloc>,
}

impl Foyer {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The foyer row
    /// - `blocs` - Bloc rows whose `foyer_id` points to this foyer
    pub fn from_entity(entity: entity::foyer::Model, blocs: Vec<entity::bloc::Model>) -> Self {
        Self {
            id_foyer: entity.id_foyer,
            nom_foyer: entity.nom_foyer,
            capacite_foyer: entity.capacite_foyer,
            blocs: blocs.into_iter().map(Bloc::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> FoyerDto {
        FoyerDto {
            id_foyer: Some(self.id_foyer),
            nom_foyer: self.nom_foyer,
            capacite_foyer: self.capacite_foyer,
            blocs: self.blocs.into_iter().map(Bloc::into_dto).collect(),
        }
    }
}

/// Parameters for creating or updating a foyer. Nested blocs are ignored here.
#[derive(Debug, Clone)]
pub struct UpsertFoyerParams {
    pub id_foyer: Option<i32>,
    pub nom_foyer: String,
    pub capacite_foyer: i64,
}

impl UpsertFoyerParams {
    pub fn from_dto(dto: FoyerDto) -> Self {
        Self {
            id_foyer: dto.id_foyer,
            nom_foyer: dto.nom_foyer,
            capacite_foyer: dto.capacite_foyer,
        }
    }
}

/// Parameters for creating a new foyer together with its blocs.
///
/// Any identifier present in the body is ignored: the foyer and every bloc are
/// inserted as new rows, and the blocs are linked to the new foyer.
#[derive(Debug, Clone)]
pub struct CreateFoyerWithBlocsParams {
    pub nom_foyer: String,
    pub capacite_foyer: i64,
    pub blocs: Vec<UpsertBlocParams>,
}

impl CreateFoyerWithBlocsParams {
    pub fn from_dto(dto: FoyerDto) -> Self {
        Self {
            nom_foyer: dto.nom_foyer,
            capacite_foyer: dto.capacite_foyer,
            blocs: dto
                .blocs
                .into_iter()
                .map(|bloc| UpsertBlocParams {
                    id_bloc: None,
                    foyer_id: None,
                    ..UpsertBlocParams::from_dto(bloc)
                })
                .collect(),
        }
    }
}
