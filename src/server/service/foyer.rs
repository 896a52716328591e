use sea_orm::DatabaseConnection;

use crate::server::{
    data::{foyer::FoyerRepository, universite::UniversiteRepository},
    error::AppError,
    model::{
        foyer::{CreateFoyerWithBlocsParams, Foyer, UpsertFoyerParams},
        universite::Universite,
    },
};

pub struct FoyerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FoyerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_or_update(&self, params: UpsertFoyerParams) -> Result<Foyer, AppError> {
        Ok(FoyerRepository::new(self.db).upsert(params).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Foyer>, AppError> {
        Ok(FoyerRepository::new(self.db).find_all().await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Foyer, AppError> {
        FoyerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| foyer_not_found(id))
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        if !FoyerRepository::new(self.db).delete_by_id(id).await? {
            return Err(foyer_not_found(id));
        }

        Ok(())
    }

    /// Links a foyer to the university named `nom_universite`
    pub async fn affecter_foyer_a_universite(
        &self,
        id_foyer: i32,
        nom_universite: &str,
    ) -> Result<Universite, AppError> {
        let universite = UniversiteRepository::new(self.db)
            .find_by_nom(nom_universite)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Universite {} introuvable", nom_universite))
            })?;

        self.affecter_foyer_a_universite_par_id(id_foyer, universite.id_universite)
            .await
    }

    /// Links a foyer to a university, both given by id
    pub async fn affecter_foyer_a_universite_par_id(
        &self,
        id_foyer: i32,
        id_universite: i32,
    ) -> Result<Universite, AppError> {
        if FoyerRepository::new(self.db).find_by_id(id_foyer).await?.is_none() {
            return Err(foyer_not_found(id_foyer));
        }

        UniversiteRepository::new(self.db)
            .set_foyer(id_universite, Some(id_foyer))
            .await?
            .ok_or_else(|| universite_not_found(id_universite))
    }

    /// Removes the foyer of a university
    pub async fn desaffecter_foyer_a_universite(
        &self,
        id_universite: i32,
    ) -> Result<Universite, AppError> {
        UniversiteRepository::new(self.db)
            .set_foyer(id_universite, None)
            .await?
            .ok_or_else(|| universite_not_found(id_universite))
    }

    /// Creates a foyer and its nested blocs
    pub async fn ajout_foyer_et_blocs(
        &self,
        params: CreateFoyerWithBlocsParams,
    ) -> Result<Foyer, AppError> {
        let foyer = FoyerRepository::new(self.db).create_with_blocs(params).await?;

        tracing::info!(
            "Foyer {} created with {} bloc(s)",
            foyer.nom_foyer,
            foyer.blocs.len()
        );

        Ok(foyer)
    }

    /// Creates a foyer with its blocs and links it to an existing university
    ///
    /// The university is checked first so that nothing is created when it is missing.
    pub async fn ajouter_foyer_et_affecter_a_universite(
        &self,
        params: CreateFoyerWithBlocsParams,
        id_universite: i32,
    ) -> Result<Foyer, AppError> {
        let universite_repo = UniversiteRepository::new(self.db);

        if universite_repo.find_by_id(id_universite).await?.is_none() {
            return Err(universite_not_found(id_universite));
        }

        let foyer = self.ajout_foyer_et_blocs(params).await?;

        universite_repo
            .set_foyer(id_universite, Some(foyer.id_foyer))
            .await?;

        Ok(foyer)
    }
}

fn foyer_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Foyer {} introuvable", id))
}

fn universite_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Universite {} introuvable", id))
}
