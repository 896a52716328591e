use sea_orm::DatabaseConnection;

use crate::server::{
    data::{etudiant::EtudiantRepository, reservation::ReservationRepository},
    error::AppError,
    model::etudiant::{Etudiant, UpsertEtudiantParams},
};

pub struct EtudiantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EtudiantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a student
    ///
    /// The cin is unique; reusing the cin of another student is rejected.
    pub async fn add_or_update(&self, params: UpsertEtudiantParams) -> Result<Etudiant, AppError> {
        let repo = EtudiantRepository::new(self.db);

        if let Some(existing) = repo.find_by_cin(params.cin).await? {
            if Some(existing.id_etudiant) != params.id_etudiant {
                return Err(AppError::BadRequest(format!(
                    "Un étudiant avec le cin {} existe déjà",
                    params.cin
                )));
            }
        }

        Ok(repo.upsert(params).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Etudiant>, AppError> {
        Ok(EtudiantRepository::new(self.db).find_all().await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Etudiant, AppError> {
        EtudiantRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Etudiant {} introuvable", id)))
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        if !EtudiantRepository::new(self.db).delete_by_id(id).await? {
            return Err(AppError::NotFound(format!("Etudiant {} introuvable", id)));
        }

        Ok(())
    }

    pub async fn find_by_nom_et(&self, nom_et: &str) -> Result<Vec<Etudiant>, AppError> {
        Ok(EtudiantRepository::new(self.db).find_by_nom(nom_et).await?)
    }

    /// Adds a reservation to the student named `nom_et` `prenom_et`
    pub async fn affecter_reservation_a_etudiant(
        &self,
        id_reservation: &str,
        nom_et: &str,
        prenom_et: &str,
    ) -> Result<Etudiant, AppError> {
        let repo = EtudiantRepository::new(self.db);
        let etudiant = self.find_by_nom_and_prenom(nom_et, prenom_et).await?;

        if !ReservationRepository::new(self.db)
            .exists(id_reservation)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Reservation {} introuvable",
                id_reservation
            )));
        }

        repo.link_reservation(etudiant.id_etudiant, id_reservation)
            .await?;

        self.find_by_id(etudiant.id_etudiant).await
    }

    /// Removes a reservation from the student named `nom_et` `prenom_et`
    pub async fn desaffecter_reservation_a_etudiant(
        &self,
        id_reservation: &str,
        nom_et: &str,
        prenom_et: &str,
    ) -> Result<Etudiant, AppError> {
        let repo = EtudiantRepository::new(self.db);
        let etudiant = self.find_by_nom_and_prenom(nom_et, prenom_et).await?;

        repo.unlink_reservation(etudiant.id_etudiant, id_reservation)
            .await?;

        self.find_by_id(etudiant.id_etudiant).await
    }

    async fn find_by_nom_and_prenom(&self, nom_et: &str, prenom_et: &str) -> Result<Etudiant, AppError> {
        EtudiantRepository::new(self.db)
            .find_by_nom_and_prenom(nom_et, prenom_et)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Etudiant {} {} introuvable", nom_et, prenom_et))
            })
    }
}
