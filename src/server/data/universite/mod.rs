use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::foyer::FoyerRepository,
    model::universite::{Universite, UpsertUniversiteParams},
};

#[cfg(test)]
mod test;

pub struct UniversiteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UniversiteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Updates the university when `id_universite` matches an existing row, inserts
    /// it otherwise.
    ///
    /// A foyer belongs to at most one university, so linking `foyer_id` here first
    /// detaches that foyer from any other university.
    pub async fn upsert(&self, params: UpsertUniversiteParams) -> Result<Universite, DbErr> {
        let existing = match params.id_universite {
            Some(id) => entity::prelude::Universite::find_by_id(id).one(self.db).await?,
            None => None,
        };

        if let Some(foyer_id) = params.foyer_id {
            self.detach_foyer(foyer_id, existing.as_ref().map(|u| u.id_universite))
                .await?;
        }

        let universite = match existing {
            Some(universite) => {
                let mut active_model: entity::universite::ActiveModel = universite.into();
                active_model.nom_universite = ActiveValue::Set(params.nom_universite);
                active_model.adresse = ActiveValue::Set(params.adresse);
                active_model.foyer_id = ActiveValue::Set(params.foyer_id);
                active_model.update(self.db).await?
            }
            None => {
                entity::universite::ActiveModel {
                    nom_universite: ActiveValue::Set(params.nom_universite),
                    adresse: ActiveValue::Set(params.adresse),
                    foyer_id: ActiveValue::Set(params.foyer_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        self.with_foyer(universite).await
    }

    pub async fn find_all(&self) -> Result<Vec<Universite>, DbErr> {
        let universites = entity::prelude::Universite::find()
            .order_by_asc(entity::universite::Column::IdUniversite)
            .all(self.db)
            .await?;

        let mut results = Vec::with_capacity(universites.len());
        for universite in universites {
            results.push(self.with_foyer(universite).await?);
        }

        Ok(results)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Universite>, DbErr> {
        match entity::prelude::Universite::find_by_id(id).one(self.db).await? {
            Some(universite) => Ok(Some(self.with_foyer(universite).await?)),
            None => Ok(None),
        }
    }

    pub async fn find_by_nom(&self, nom_universite: &str) -> Result<Option<Universite>, DbErr> {
        let universite = entity::prelude::Universite::find()
            .filter(entity::universite::Column::NomUniversite.eq(nom_universite))
            .order_by_asc(entity::universite::Column::IdUniversite)
            .one(self.db)
            .await?;

        match universite {
            Some(universite) => Ok(Some(self.with_foyer(universite).await?)),
            None => Ok(None),
        }
    }

    /// Sets or clears the foyer of a university.
    ///
    /// # Returns
    /// - `Ok(Some(Universite))` - Updated university
    /// - `Ok(None)` - No university with this id
    pub async fn set_foyer(
        &self,
        id_universite: i32,
        foyer_id: Option<i32>,
    ) -> Result<Option<Universite>, DbErr> {
        let Some(universite) = entity::prelude::Universite::find_by_id(id_universite)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if let Some(foyer_id) = foyer_id {
            self.detach_foyer(foyer_id, Some(id_universite)).await?;
        }

        let mut active_model: entity::universite::ActiveModel = universite.into();
        active_model.foyer_id = ActiveValue::Set(foyer_id);
        let universite = active_model.update(self.db).await?;

        Ok(Some(self.with_foyer(universite).await?))
    }

    /// # Returns
    /// - `Ok(true)` - University deleted
    /// - `Ok(false)` - No university with this id
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Universite::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Clears `foyer_id` on every university other than `keep` that holds this foyer.
    async fn detach_foyer(&self, foyer_id: i32, keep: Option<i32>) -> Result<(), DbErr> {
        let mut query = entity::prelude::Universite::update_many()
            .col_expr(
                entity::universite::Column::FoyerId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::universite::Column::FoyerId.eq(foyer_id));

        if let Some(keep) = keep {
            query = query.filter(entity::universite::Column::IdUniversite.ne(keep));
        }

        query.exec(self.db).await?;

        Ok(())
    }

    async fn with_foyer(&self, universite: entity::universite::Model) -> Result<Universite, DbErr> {
        let foyer = match universite.foyer_id {
            Some(foyer_id) => FoyerRepository::new(self.db).find_by_id(foyer_id).await?,
            None => None,
        };

        Ok(Universite::from_entity(universite, foyer))
    }
}
