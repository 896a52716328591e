//! Room domain models and parameters.
//!
//! Rooms carry a type that caps their number of occupants. The domain `TypeChambre`
//! is shared with the API layer and converted to the stored enum at the repository
//! boundary.

use crate::model::chambre::{
    ChambreDto, PlacesDisponiblesDto, TypeChambre, TypeChambrePourcentageDto,
};

impl From<entity::sea_orm_active_enums::TypeChambre> for TypeChambre {
    fn from(value: entity::sea_orm_active_enums::TypeChambre) -> Self {
        match value {
            entity::sea_orm_active_enums::TypeChambre::Simple => TypeChambre::Simple,
            entity::sea_orm_active_enums::TypeChambre::Double => TypeChambre::Double,
            entity::sea_orm_active_enums::TypeChambre::Triple => TypeChambre::Triple,
        }
    }
}

impl From<TypeChambre> for entity::sea_orm_active_enums::TypeChambre {
    fn from(value: TypeChambre) -> Self {
        match value {
            TypeChambre::Simple => entity::sea_orm_active_enums::TypeChambre::Simple,
            TypeChambre::Double => entity::sea_orm_active_enums::TypeChambre::Double,
            TypeChambre::Triple => entity::sea_orm_active_enums::TypeChambre::Triple,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chambre {
    pub id_chambre: i32,
    pub numero_chambre: i64,
    pub type_c: TypeChambre,
    pub bloc_id: Option<i32>,
}

impl Chambre {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::chambre::Model) -> Self {
        Self {
            id_chambre: entity.id_chambre,
            numero_chambre: entity.numero_chambre,
            type_c: entity.type_c.into(),
            bloc_id: entity.bloc_id,
        }
    }

    pub fn into_dto(self) -> ChambreDto {
        ChambreDto {
            id_chambre: Some(self.id_chambre),
            numero_chambre: self.numero_chambre,
            type_c: self.type_c,
            id_bloc: self.bloc_id,
        }
    }
}

/// Parameters for creating or updating a room.
///
/// Updates when `id_chambre` points to an existing room, inserts otherwise.
#[derive(Debug, Clone)]
pub struct UpsertChambreParams {
    pub id_chambre: Option<i32>,
    pub numero_chambre: i64,
    pub type_c: TypeChambre,
    pub bloc_id: Option<i32>,
}

impl UpsertChambreParams {
    pub fn from_dto(dto: ChambreDto) -> Self {
        Self {
            id_chambre: dto.id_chambre,
            numero_chambre: dto.numero_chambre,
            type_c: dto.type_c,
            bloc_id: dto.id_bloc,
        }
    }
}

/// Number of rooms of one type and their share of all rooms, in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChambrePourcentage {
    pub type_c: TypeChambre,
    pub nombre: u64,
    pub pourcentage: f64,
}

impl TypeChambrePourcentage {
    pub fn into_dto(self) -> TypeChambrePourcentageDto {
        TypeChambrePourcentageDto {
            type_c: self.type_c,
            nombre: self.nombre,
            pourcentage: self.pourcentage,
        }
    }
}

/// Remaining places of a room for the current academic year.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacesDisponibles {
    pub chambre: Chambre,
    pub places_disponibles: u64,
}

impl PlacesDisponibles {
    pub fn into_dto(self) -> PlacesDisponiblesDto {
        PlacesDisponiblesDto {
            id_chambre: self.chambre.id_chambre,
            numero_chambre: self.chambre.numero_chambre,
            type_c: self.chambre.type_c,
            places_disponibles: self.places_disponibles,
        }
    }
}
