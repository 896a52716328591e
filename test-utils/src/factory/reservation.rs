//! Reservation factory for creating test reservation entities.
//!
//! Unlike the assignment workflow, the factory performs no capacity check, which
//! lets tests seed rooms that are already full.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let reservation = ReservationFactory::new(&db)
///     .annee_universitaire(NaiveDate::from_ymd_opt(2023, 10, 1).unwrap())
///     .chambre_id(Some(chambre.id_chambre))
///     .etudiant(etudiant.id_etudiant)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    id_reservation: String,
    annee_universitaire: NaiveDate,
    est_valide: bool,
    chambre_id: Option<i32>,
    etudiant_ids: Vec<i32>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory for a valid reservation anchored on today.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id_reservation: format!("RES-{}", next_id()),
            annee_universitaire: chrono::Local::now().date_naive(),
            est_valide: true,
            chambre_id: None,
            etudiant_ids: Vec::new(),
        }
    }

    /// Sets the reservation identifier.
    pub fn id_reservation(mut self, id_reservation: impl Into<String>) -> Self {
        self.id_reservation = id_reservation.into();
        self
    }

    /// Sets the anchor date.
    pub fn annee_universitaire(mut self, annee_universitaire: NaiveDate) -> Self {
        self.annee_universitaire = annee_universitaire;
        self
    }

    /// Sets the validity flag.
    pub fn est_valide(mut self, est_valide: bool) -> Self {
        self.est_valide = est_valide;
        self
    }

    /// Links the reservation to a room.
    pub fn chambre_id(mut self, chambre_id: Option<i32>) -> Self {
        self.chambre_id = chambre_id;
        self
    }

    /// Links a student to the reservation. May be called multiple times.
    pub fn etudiant(mut self, etudiant_id: i32) -> Self {
        self.etudiant_ids.push(etudiant_id);
        self
    }

    /// Builds and inserts the reservation and its student links.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            id_reservation: ActiveValue::Set(self.id_reservation),
            annee_universitaire: ActiveValue::Set(self.annee_universitaire),
            est_valide: ActiveValue::Set(self.est_valide),
            chambre_id: ActiveValue::Set(self.chambre_id),
        }
        .insert(self.db)
        .await?;

        for etudiant_id in self.etudiant_ids {
            entity::reservation_etudiant::ActiveModel {
                reservation_id: ActiveValue::Set(reservation.id_reservation.clone()),
                etudiant_id: ActiveValue::Set(etudiant_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(reservation)
    }
}

/// Creates a valid reservation anchored on today, linked to the given room.
pub async fn create_reservation(
    db: &DatabaseConnection,
    chambre_id: Option<i32>,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db).chambre_id(chambre_id).build().await
}
