use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        bloc::BlocRepository, chambre::ChambreRepository, etudiant::EtudiantRepository,
        reservation::ReservationRepository,
    },
    error::{reservation::ReservationError, AppError},
    model::reservation::{
        reservation_id, Annulation, CreateReservationParams, Reservation, UpsertReservationParams,
    },
    util::academic_year::AcademicYear,
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    today: NaiveDate,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Overrides the reference date used to compute the current academic year.
    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Academic year containing the reference date
    pub fn annee_universitaire(&self) -> Result<AcademicYear, AppError> {
        Ok(AcademicYear::containing(self.today)?)
    }

    /// Creates or updates a reservation's own columns
    ///
    /// Student links are not touched; use the assignment workflow or the student
    /// endpoints for those.
    pub async fn add_or_update(&self, params: UpsertReservationParams) -> Result<Reservation, AppError> {
        if params.id_reservation.trim().is_empty() {
            return Err(AppError::BadRequest(
                "idReservation est obligatoire".to_string(),
            ));
        }

        if let Some(chambre_id) = params.chambre_id {
            if ChambreRepository::new(self.db)
                .find_by_id(chambre_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound(format!("Chambre {} introuvable", chambre_id)));
            }
        }

        Ok(ReservationRepository::new(self.db).upsert(params).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db).find_all().await?)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Reservation, AppError> {
        ReservationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| reservation_not_found(id))
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        if !ReservationRepository::new(self.db).delete_by_id(id).await? {
            return Err(reservation_not_found(id));
        }

        Ok(())
    }

    /// Reserves a room for a student for the current academic year
    ///
    /// # Arguments
    /// - `numero_chambre` - Number of the room to reserve
    /// - `cin` - National id of the student
    ///
    /// # Returns
    /// - `Ok(Reservation)` - New valid reservation linked to the room and the student
    /// - `Err(ReservationError::RoomNotFound)` - No room with this number
    /// - `Err(ReservationError::StudentNotFound)` - No student with this cin
    /// - `Err(ReservationError::RoomWithoutBloc)` - The room is not in a bloc
    /// - `Err(ReservationError::RoomFull)` - Valid reservations this year reached the room capacity
    /// - `Err(ReservationError::AlreadyReserved)` - The student already holds a valid
    ///   reservation of this room this year
    pub async fn ajouter_reservation_et_assigner_a_chambre_et_a_etudiant(
        &self,
        numero_chambre: i64,
        cin: i64,
    ) -> Result<Reservation, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        let chambre = ChambreRepository::new(self.db)
            .find_by_numero(numero_chambre)
            .await?
            .ok_or(ReservationError::RoomNotFound(numero_chambre))?;

        let etudiant = EtudiantRepository::new(self.db)
            .find_by_cin(cin)
            .await?
            .ok_or(ReservationError::StudentNotFound(cin))?;

        let bloc = match chambre.bloc_id {
            Some(bloc_id) => BlocRepository::new(self.db).find_by_id(bloc_id).await?,
            None => None,
        }
        .ok_or(ReservationError::RoomWithoutBloc(numero_chambre))?;

        let year = self.annee_universitaire()?;

        let reservations = reservation_repo
            .count_valid_by_chambre_between(chambre.id_chambre, year.debut, year.fin)
            .await?;

        if reservations >= chambre.type_c.capacity() {
            tracing::info!("Chambre {} {} remplie !", chambre.type_c, numero_chambre);

            return Err(ReservationError::RoomFull {
                numero_chambre,
                type_c: chambre.type_c,
            }
            .into());
        }

        let id = reservation_id(&year, &bloc.nom_bloc, numero_chambre, cin);

        let params = CreateReservationParams {
            id_reservation: id.clone(),
            annee_universitaire: self.today,
            est_valide: true,
            chambre_id: Some(chambre.id_chambre),
            etudiant_ids: vec![etudiant.id_etudiant],
        };

        // A cancelled reservation keeps its id, so booking again reactivates it
        let reservation = match reservation_repo.find_by_id(&id).await? {
            Some(existing) if existing.est_valide => {
                return Err(ReservationError::AlreadyReserved(id).into());
            }
            Some(_) => reservation_repo
                .reactivate(params)
                .await?
                .ok_or_else(|| reservation_not_found(&id))?,
            None => reservation_repo.create(params).await?,
        };

        tracing::info!(
            "Réservation {} créée pour l'étudiant {}",
            reservation.id_reservation,
            cin
        );

        Ok(reservation)
    }

    /// Counts the reservations anchored between `debut` and `fin` inclusive
    pub async fn get_reservation_par_annee_universitaire(
        &self,
        debut: NaiveDate,
        fin: NaiveDate,
    ) -> Result<u64, AppError> {
        if debut > fin {
            return Err(AppError::BadRequest(format!(
                "debutAnnee {} est postérieure à finAnnee {}",
                debut, fin
            )));
        }

        Ok(ReservationRepository::new(self.db)
            .count_between(debut, fin)
            .await?)
    }

    /// Cancels the valid reservation of a student
    ///
    /// The reservation is detached from its room then deleted.
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation message naming the cancelled reservation
    /// - `Err(ReservationError::NoActiveReservation)` - The student holds no valid reservation
    pub async fn annuler_reservation(&self, cin: i64) -> Result<String, AppError> {
        let repo = ReservationRepository::new(self.db);

        let reservation = repo
            .find_valid_by_cin(cin)
            .await?
            .ok_or(ReservationError::NoActiveReservation(cin))?;

        repo.cancel(&reservation.id_reservation).await?;

        tracing::info!("Réservation {} annulée", reservation.id_reservation);

        Ok(format!(
            "La réservation {} est annulée avec succès",
            reservation.id_reservation
        ))
    }

    /// Links a reservation to a room
    pub async fn affect_reservation_a_chambre(
        &self,
        id_reservation: &str,
        id_chambre: i32,
    ) -> Result<Reservation, AppError> {
        self.find_chambre(id_chambre).await?;
        let repo = ReservationRepository::new(self.db);

        if !repo.set_chambre(id_reservation, Some(id_chambre)).await? {
            return Err(reservation_not_found(id_reservation));
        }

        self.find_by_id(id_reservation).await
    }

    /// Unlinks a reservation from a room
    ///
    /// Nothing changes when the reservation is linked to another room.
    pub async fn deaffect_reservation_a_chambre(
        &self,
        id_reservation: &str,
        id_chambre: i32,
    ) -> Result<Reservation, AppError> {
        self.find_chambre(id_chambre).await?;
        let reservation = self.find_by_id(id_reservation).await?;

        if reservation.chambre_id != Some(id_chambre) {
            return Ok(reservation);
        }

        ReservationRepository::new(self.db)
            .set_chambre(id_reservation, None)
            .await?;

        self.find_by_id(id_reservation).await
    }

    /// Invalidates every valid reservation of the current academic year
    ///
    /// Reservations are updated one by one; reservations outside the year are left
    /// as they are.
    pub async fn annuler_reservations(&self) -> Result<Annulation, AppError> {
        let year = self.annee_universitaire()?;
        let repo = ReservationRepository::new(self.db);

        let ids = repo.find_valid_ids_between(year.debut, year.fin).await?;

        let mut reservations_annulees = 0;
        for id in ids {
            if repo.set_valide(&id, false).await? {
                tracing::info!("La reservation {} est annulée automatiquement", id);
                reservations_annulees += 1;
            }
        }

        Ok(Annulation {
            annee_universitaire: year,
            reservations_annulees,
        })
    }

    async fn find_chambre(&self, id_chambre: i32) -> Result<(), AppError> {
        ChambreRepository::new(self.db)
            .find_by_id(id_chambre)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Chambre {} introuvable", id_chambre)))
    }
}

fn reservation_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Reservation {} introuvable", id))
}
