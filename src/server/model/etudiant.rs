//! Student domain models and parameters.

use chrono::NaiveDate;

use crate::model::etudiant::EtudiantDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Etudiant {
    pub id_etudiant: i32,
    pub nom_et: String,
    pub prenom_et: String,
    pub cin: i64,
    pub ecole: String,
    pub date_naissance: NaiveDate,
    /// Identifiers of the reservations linked to the student.
    pub reservations: Vec<String>,
}

impl Etudiant {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The student row
    /// - `reservations` - Reservation identifiers from the join table
    pub fn from_entity(entity: entity::etudiant::Model, reservations: Vec<String>) -> Self {
        Self {
            id_etudiant: entity.id_etudiant,
            nom_et: entity.nom_et,
            prenom_et: entity.prenom_et,
            cin: entity.cin,
            ecole: entity.ecole,
            date_naissance: entity.date_naissance,
            reservations,
        }
    }

    pub fn into_dto(self) -> EtudiantDto {
        EtudiantDto {
            id_etudiant: Some(self.id_etudiant),
            nom_et: self.nom_et,
            prenom_et: self.prenom_et,
            cin: self.cin,
            ecole: self.ecole,
            date_naissance: self.date_naissance,
            reservations: self.reservations,
        }
    }
}

/// Parameters for creating or updating a student. Reservation links are untouched.
#[derive(Debug, Clone)]
pub struct UpsertEtudiantParams {
    pub id_etudiant: Option<i32>,
    pub nom_et: String,
    pub prenom_et: String,
    pub cin: i64,
    pub ecole: String,
    pub date_naissance: NaiveDate,
}

impl UpsertEtudiantParams {
    pub fn from_dto(dto: EtudiantDto) -> Self {
        Self {
            id_etudiant: dto.id_etudiant,
            nom_et: dto.nom_et,
            prenom_et: dto.prenom_et,
            cin: dto.cin,
            ecole: dto.ecole,
            date_naissance: dto.date_naissance,
        }
    }
}
