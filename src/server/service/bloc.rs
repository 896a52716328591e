use sea_orm::DatabaseConnection;

use crate::server::{
    data::{bloc::BlocRepository, chambre::ChambreRepository, foyer::FoyerRepository},
    error::AppError,
    model::{
        bloc::{Bloc, BlocWithChambres, UpsertBlocParams},
        chambre::Chambre,
    },
};

pub struct BlocService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlocService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_or_update(&self, params: UpsertBlocParams) -> Result<Bloc, AppError> {
        if let Some(foyer_id) = params.foyer_id {
            if FoyerRepository::new(self.db).find_by_id(foyer_id).await?.is_none() {
                return Err(AppError::NotFound(format!("Foyer {} introuvable", foyer_id)));
            }
        }

        Ok(BlocRepository::new(self.db).upsert(params).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Bloc>, AppError> {
        Ok(BlocRepository::new(self.db).find_all().await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Bloc, AppError> {
        BlocRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bloc {} introuvable", id)))
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        if !BlocRepository::new(self.db).delete_by_id(id).await? {
            return Err(AppError::NotFound(format!("Bloc {} introuvable", id)));
        }

        Ok(())
    }

    /// Moves the listed rooms into the bloc named `nom_bloc`
    ///
    /// Unknown room numbers are skipped.
    ///
    /// # Returns
    /// - `Ok(BlocWithChambres)` - The bloc with all of its rooms after the move
    /// - `Err(AppError::NotFound)` - No bloc with this name
    pub async fn affecter_chambres_a_bloc(
        &self,
        numeros: &[i64],
        nom_bloc: &str,
    ) -> Result<BlocWithChambres, AppError> {
        let bloc = self.find_by_nom(nom_bloc).await?;
        let chambre_repo = ChambreRepository::new(self.db);

        let updated = chambre_repo
            .set_bloc_for_numeros(numeros, Some(bloc.id_bloc))
            .await?;

        tracing::info!("{} chambre(s) affectée(s) au bloc {}", updated, bloc.nom_bloc);

        let chambres = chambre_repo.find_by_nom_bloc(&bloc.nom_bloc).await?;

        Ok(BlocWithChambres { bloc, chambres })
    }

    /// Detaches the listed rooms from whatever bloc they are in
    ///
    /// # Returns
    /// - `Ok(Vec<Chambre>)` - The known rooms among `numeros`, now without bloc
    pub async fn desaffecter_chambres_a_bloc(&self, numeros: &[i64]) -> Result<Vec<Chambre>, AppError> {
        let chambre_repo = ChambreRepository::new(self.db);

        chambre_repo.set_bloc_for_numeros(numeros, None).await?;

        let mut chambres = Vec::with_capacity(numeros.len());
        for numero in numeros {
            if let Some(chambre) = chambre_repo.find_by_numero(*numero).await? {
                chambres.push(chambre);
            }
        }

        Ok(chambres)
    }

    /// Attaches the bloc named `nom_bloc` to the foyer named `nom_foyer`
    pub async fn affecter_bloc_a_foyer(&self, nom_bloc: &str, nom_foyer: &str) -> Result<Bloc, AppError> {
        let bloc = self.find_by_nom(nom_bloc).await?;
        let foyer = FoyerRepository::new(self.db)
            .find_by_nom(nom_foyer)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Foyer {} introuvable", nom_foyer)))?;

        self.set_foyer(bloc.id_bloc, Some(foyer.id_foyer)).await
    }

    /// Detaches the bloc named `nom_bloc` from its foyer
    pub async fn desaffecter_bloc_a_foyer(&self, nom_bloc: &str) -> Result<Bloc, AppError> {
        let bloc = self.find_by_nom(nom_bloc).await?;

        self.set_foyer(bloc.id_bloc, None).await
    }

    async fn find_by_nom(&self, nom_bloc: &str) -> Result<Bloc, AppError> {
        BlocRepository::new(self.db)
            .find_by_nom(nom_bloc)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bloc {} introuvable", nom_bloc)))
    }

    async fn set_foyer(&self, id_bloc: i32, foyer_id: Option<i32>) -> Result<Bloc, AppError> {
        BlocRepository::new(self.db)
            .set_foyer(id_bloc, foyer_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bloc {} introuvable", id_bloc)))
    }
}
