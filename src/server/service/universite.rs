use sea_orm::DatabaseConnection;

use crate::server::{
    data::{foyer::FoyerRepository, universite::UniversiteRepository},
    error::AppError,
    model::universite::{CreateUniversiteWithFoyerParams, Universite, UpsertUniversiteParams},
};

pub struct UniversiteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UniversiteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a university, linking the referenced foyer if any
    pub async fn add_or_update(&self, params: UpsertUniversiteParams) -> Result<Universite, AppError> {
        if let Some(foyer_id) = params.foyer_id {
            if FoyerRepository::new(self.db).find_by_id(foyer_id).await?.is_none() {
                return Err(AppError::NotFound(format!("Foyer {} introuvable", foyer_id)));
            }
        }

        let universite = UniversiteRepository::new(self.db).upsert(params).await?;

        Ok(universite)
    }

    pub async fn find_all(&self) -> Result<Vec<Universite>, AppError> {
        Ok(UniversiteRepository::new(self.db).find_all().await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Universite, AppError> {
        UniversiteRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Universite {} introuvable", id)))
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        if !UniversiteRepository::new(self.db).delete_by_id(id).await? {
            return Err(AppError::NotFound(format!("Universite {} introuvable", id)));
        }

        Ok(())
    }

    /// Creates the nested foyer (with its blocs) first, then the university owning it
    pub async fn ajouter_universite_et_son_foyer(
        &self,
        params: CreateUniversiteWithFoyerParams,
    ) -> Result<Universite, AppError> {
        let foyer_id = match params.foyer {
            Some(foyer) => Some(
                FoyerRepository::new(self.db)
                    .create_with_blocs(foyer)
                    .await?
                    .id_foyer,
            ),
            None => None,
        };

        let universite = UniversiteRepository::new(self.db)
            .upsert(UpsertUniversiteParams {
                id_universite: None,
                nom_universite: params.nom_universite,
                adresse: params.adresse,
                foyer_id,
            })
            .await?;

        tracing::info!(
            "Universite {} created with foyer {:?}",
            universite.nom_universite,
            foyer_id
        );

        Ok(universite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::{bloc::UpsertBlocParams, foyer::CreateFoyerWithBlocsParams};
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn creates_universite_with_nested_foyer() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_housing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = UniversiteService::new(db);
        let universite = service
            .ajouter_universite_et_son_foyer(CreateUniversiteWithFoyerParams {
                nom_universite: "ESPRIT".to_string(),
                adresse: "Ghazela".to_string(),
                foyer: Some(CreateFoyerWithBlocsParams {
                    nom_foyer: "Foyer Esprit".to_string(),
                    capacite_foyer: 120,
                    blocs: vec![UpsertBlocParams {
                        id_bloc: None,
                        nom_bloc: "A".to_string(),
                        capacite_bloc: 60,
                        foyer_id: None,
                    }],
                }),
            })
            .await?;

        let foyer = universite.foyer.unwrap();
        assert_eq!(foyer.nom_foyer, "Foyer Esprit");
        assert_eq!(foyer.blocs.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_unknown_foyer() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_housing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = UniversiteService::new(db);
        let result = service
            .add_or_update(UpsertUniversiteParams {
                id_universite: None,
                nom_universite: "ENIT".to_string(),
                adresse: "Tunis".to_string(),
                foyer_id: Some(404),
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn deleted_universite_disappears_from_find_all() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_housing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let universite = factory::create_universite(db).await?;
        factory::create_universite(db).await?;

        let service = UniversiteService::new(db);
        service.delete_by_id(universite.id_universite).await?;

        let remaining = service.find_all().await?;
        assert_eq!(remaining.len(), 1);
        assert!(remaining
            .iter()
            .all(|u| u.id_universite != universite.id_universite));

        assert!(matches!(
            service.delete_by_id(universite.id_universite).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}
