//! University domain models and parameters.

use crate::{
    model::universite::UniversiteDto,
    server::model::foyer::{CreateFoyerWithBlocsParams, Foyer},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Universite {
    pub id_universite: i32,
    pub nom_universite: String,
    pub adresse: String,
    pub foyer: Option<Foyer>,
}

impl Universite {
    /// Converts entity models to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::universite::Model, foyer: Option<Foyer>) -> Self {
        Self {
            id_universite: entity.id_universite,
            nom_universite: entity.nom_universite,
            adresse: entity.adresse,
            foyer,
        }
    }

    pub fn into_dto(self) -> UniversiteDto {
        UniversiteDto {
            id_universite: Some(self.id_universite),
            nom_universite: self.nom_universite,
            adresse: self.adresse,
            foyer: self.foyer.map(Foyer::into_dto),
        }
    }
}

/// Parameters for creating or updating a university.
///
/// The foyer link is taken from `foyer.idFoyer` of the request body.
#[derive(Debug, Clone)]
pub struct UpsertUniversiteParams {
    pub id_universite: Option<i32>,
    pub nom_universite: String,
    pub adresse: String,
    pub foyer_id: Option<i32>,
}

impl UpsertUniversiteParams {
    pub fn from_dto(dto: UniversiteDto) -> Self {
        Self {
            id_universite: dto.id_universite,
            nom_universite: dto.nom_universite,
            adresse: dto.adresse,
            foyer_id: dto.foyer.and_then(|foyer| foyer.id_foyer),
        }
    }
}

/// Parameters for creating a university together with a new foyer.
#[derive(Debug, Clone)]
pub struct CreateUniversiteWithFoyerParams {
    pub nom_universite: String,
    pub adresse: String,
    pub foyer: Option<CreateFoyerWithBlocsParams>,
}

impl CreateUniversiteWithFoyerParams {
    pub fn from_dto(dto: UniversiteDto) -> Self {
        Self {
            nom_universite: dto.nom_universite,
            adresse: dto.adresse,
            foyer: dto.foyer.map(CreateFoyerWithBlocsParams::from_dto),
        }
    }
}
