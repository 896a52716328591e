//! Reservation domain models and parameters.
//!
//! A reservation links students to a room for one academic year. Its identifier is
//! derived from the academic year, the bloc, the room number and the student's cin
//! when it is created through the assignment workflow.

use chrono::NaiveDate;

use crate::{
    model::reservation::{AnnulationDto, ReservationDto},
    server::{model::etudiant::Etudiant, util::academic_year::AcademicYear},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id_reservation: String,
    pub annee_universitaire: NaiveDate,
    pub est_valide: bool,
    pub chambre_id: Option<i32>,
    pub etudiants: Vec<Etudiant>,
}

impl Reservation {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// Students nested in a reservation do not list their own reservations.
    pub fn from_entity(
        entity: entity::reservation::Model,
        etudiants: Vec<entity::etudiant::Model>,
    ) -> Self {
        Self {
            id_reservation: entity.id_reservation,
            annee_universitaire: entity.annee_universitaire,
            est_valide: entity.est_valide,
            chambre_id: entity.chambre_id,
            etudiants: etudiants
                .into_iter()
                .map(|etudiant| Etudiant::from_entity(etudiant, Vec::new()))
                .collect(),
        }
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id_reservation: self.id_reservation,
            annee_universitaire: self.annee_universitaire,
            est_valide: self.est_valide,
            id_chambre: self.chambre_id,
            etudiants: self.etudiants.into_iter().map(Etudiant::into_dto).collect(),
        }
    }
}

/// Builds the identifier of a reservation made through the assignment workflow.
///
/// Format: `"{debut}/{fin}-{nomBloc}-{numeroChambre}-{cin}"`, e.g.
/// `"2023/2024-Bloc A-101-12345678"`.
pub fn reservation_id(year: &AcademicYear, nom_bloc: &str, numero_chambre: i64, cin: i64) -> String {
    format!("{}-{}-{}-{}", year.label(), nom_bloc, numero_chambre, cin)
}

/// Parameters for inserting a new reservation with its student links.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub id_reservation: String,
    pub annee_universitaire: NaiveDate,
    pub est_valide: bool,
    pub chambre_id: Option<i32>,
    pub etudiant_ids: Vec<i32>,
}

/// Parameters for creating or updating a reservation's own columns.
///
/// Student links are left as they are.
#[derive(Debug, Clone)]
pub struct UpsertReservationParams {
    pub id_reservation: String,
    pub annee_universitaire: NaiveDate,
    pub est_valide: bool,
    pub chambre_id: Option<i32>,
}

impl UpsertReservationParams {
    pub fn from_dto(dto: ReservationDto) -> Self {
        Self {
            id_reservation: dto.id_reservation,
            annee_universitaire: dto.annee_universitaire,
            est_valide: dto.est_valide,
            chambre_id: dto.id_chambre,
        }
    }
}

/// Outcome of the yearly cancellation sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Annulation {
    pub annee_universitaire: AcademicYear,
    pub reservations_annulees: u64,
}

impl Annulation {
    pub fn into_dto(self) -> AnnulationDto {
        AnnulationDto {
            annee_universitaire: self.annee_universitaire.into_dto(),
            reservations_annulees: self.reservations_annulees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_identifier_from_year_bloc_room_and_cin() {
        let year =
            AcademicYear::containing(NaiveDate::from_ymd_opt(2023, 10, 2).unwrap()).unwrap();

        let id = reservation_id(&year, "A", 101, 12345678);

        assert_eq!(id, "2023/2024-A-101-12345678");
    }
}
