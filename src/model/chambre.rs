use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Room type. Each type allows a fixed number of occupants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TypeChambre {
    Simple,
    Double,
    Triple,
}

impl TypeChambre {
    pub const ALL: [TypeChambre; 3] = [TypeChambre::Simple, TypeChambre::Double, TypeChambre::Triple];

    /// Maximum number of occupants for this room type.
    pub fn capacity(self) -> u64 {
        match self {
            TypeChambre::Simple => 1,
            TypeChambre::Double => 2,
            TypeChambre::Triple => 3,
        }
    }
}

impl std::fmt::Display for TypeChambre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TypeChambre::Simple => "SIMPLE",
            TypeChambre::Double => "DOUBLE",
            TypeChambre::Triple => "TRIPLE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChambreDto {
    #[serde(default)]
    pub id_chambre: Option<i32>,
    pub numero_chambre: i64,
    pub type_c: TypeChambre,
    #[serde(default)]
    pub id_bloc: Option<i32>,
}

/// Share of all rooms having a given type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeChambrePourcentageDto {
    pub type_c: TypeChambre,
    pub nombre: u64,
    pub pourcentage: f64,
}

/// Remaining places of a room for the current academic year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacesDisponiblesDto {
    pub id_chambre: i32,
    pub numero_chambre: i64,
    pub type_c: TypeChambre,
    pub places_disponibles: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_follows_room_type() {
        assert_eq!(TypeChambre::Simple.capacity(), 1);
        assert_eq!(TypeChambre::Double.capacity(), 2);
        assert_eq!(TypeChambre::Triple.capacity(), 3);
    }

    #[test]
    fn serializes_as_upper_case_name() {
        let json = serde_json::to_string(&TypeChambre::Double).unwrap();
        assert_eq!(json, "\"DOUBLE\"");

        let parsed: TypeChambre = serde_json::from_str("\"TRIPLE\"").unwrap();
        assert_eq!(parsed, TypeChambre::Triple);
    }

    #[test]
    fn chambre_dto_uses_camel_case_keys() {
        let dto: ChambreDto =
            serde_json::from_str(r#"{"numeroChambre": 101, "typeC": "SIMPLE"}"#).unwrap();

        assert_eq!(dto.numero_chambre, 101);
        assert_eq!(dto.type_c, TypeChambre::Simple);
        assert!(dto.id_chambre.is_none());
        assert!(dto.id_bloc.is_none());
    }
}
