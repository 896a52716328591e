//! Bloc domain models and parameters.

use crate::{
    model::bloc::{BlocChambresDto, BlocDto},
    server::model::chambre::Chambre,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Bloc {
    pub id_bloc: i32,
    pub nom_bloc: String,
    pub capacite_bloc: i64,
    pub foyer_id: Option<i32>,
}

impl Bloc {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::bloc::Model) -> Self {
        Self {
            id_bloc: entity.id_bloc,
            nom_bloc: entity.nom_bloc,
            capacite_bloc: entity.capacite_bloc,
            foyer_id: entity.foyer_id,
        }
    }

    pub fn into_dto(self) -> BlocDto {
        BlocDto {
            id_bloc: Some(self.id_bloc),
            nom_bloc: self.nom_bloc,
            capacite_bloc: self.capacite_bloc,
            id_foyer: self.foyer_id,
        }
    }
}

/// A bloc with the rooms attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct BlocWithChambres {
    pub bloc: Bloc,
    pub chambres: Vec<Chambre>,
}

impl BlocWithChambres {
    pub fn into_dto(self) -> BlocChambresDto {
        BlocChambresDto {
            id_bloc: self.bloc.id_bloc,
            nom_bloc: self.bloc.nom_bloc,
            capacite_bloc: self.bloc.capacite_bloc,
            chambres: self.chambres.into_iter().map(Chambre::into_dto).collect(),
        }
    }
}

/// Parameters for creating or updating a bloc.
#[derive(Debug, Clone)]
pub struct UpsertBlocParams {
    pub id_bloc: Option<i32>,
    pub nom_bloc: String,
    pub capacite_bloc: i64,
    pub foyer_id: Option<i32>,
}

impl UpsertBlocParams {
    pub fn from_dto(dto: BlocDto) -> Self {
        Self {
            id_bloc: dto.id_bloc,
            nom_bloc: dto.nom_bloc,
            capacite_bloc: dto.capacite_bloc,
            foyer_id: dto.id_foyer,
        }
    }
}
