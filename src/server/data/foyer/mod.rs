use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::foyer::{CreateFoyerWithBlocsParams, Foyer, UpsertFoyerParams};

#[cfg(test)]
mod test;

pub struct FoyerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FoyerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Updates the foyer when `id_foyer` matches an existing row, inserts it otherwise.
    ///
    /// # Returns
    /// - `Ok(Foyer)` - The stored foyer with its blocs
    /// - `Err(DbErr)` - Database error
    pub async fn upsert(&self, params: UpsertFoyerParams) -> Result<Foyer, DbErr> {
        let existing = match params.id_foyer {
            Some(id) => entity::prelude::Foyer::find_by_id(id).one(self.db).await?,
            None => None,
        };

        let foyer = match existing {
            Some(foyer) => {
                let mut active_model: entity::foyer::ActiveModel = foyer.into();
                active_model.nom_foyer = ActiveValue::Set(params.nom_foyer);
                active_model.capacite_foyer = ActiveValue::Set(params.capacite_foyer);
                active_model.update(self.db).await?
            }
            None => {
                entity::foyer::ActiveModel {
                    nom_foyer: ActiveValue::Set(params.nom_foyer),
                    capacite_foyer: ActiveValue::Set(params.capacite_foyer),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        self.with_blocs(foyer).await
    }

    /// Inserts a new foyer, then each of its blocs linked to it.
    ///
    /// Runs in one transaction so a failed bloc leaves no foyer behind.
    pub async fn create_with_blocs(
        &self,
        params: CreateFoyerWithBlocsParams,
    ) -> Result<Foyer, DbErr> {
        let txn = self.db.begin().await?;

        let foyer = entity::foyer::ActiveModel {
            nom_foyer: ActiveValue::Set(params.nom_foyer),
            capacite_foyer: ActiveValue::Set(params.capacite_foyer),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for bloc in params.blocs {
            entity::bloc::ActiveModel {
                nom_bloc: ActiveValue::Set(bloc.nom_bloc),
                capacite_bloc: ActiveValue::Set(bloc.capacite_bloc),
                foyer_id: ActiveValue::Set(Some(foyer.id_foyer)),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        self.with_blocs(foyer).await
    }

    pub async fn find_all(&self) -> Result<Vec<Foyer>, DbErr> {
        let foyers = entity::prelude::Foyer::find()
            .find_with_related(entity::prelude::Bloc)
            .order_by_asc(entity::foyer::Column::IdFoyer)
            .all(self.db)
            .await?;

        Ok(foyers
            .into_iter()
            .map(|(foyer, blocs)| Foyer::from_entity(foyer, blocs))
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Foyer>, DbErr> {
        match entity::prelude::Foyer::find_by_id(id).one(self.db).await? {
            Some(foyer) => Ok(Some(self.with_blocs(foyer).await?)),
            None => Ok(None),
        }
    }

    /// Finds a foyer by name. The first match wins when names are duplicated.
    pub async fn find_by_nom(&self, nom_foyer: &str) -> Result<Option<Foyer>, DbErr> {
        let foyer = entity::prelude::Foyer::find()
            .filter(entity::foyer::Column::NomFoyer.eq(nom_foyer))
            .order_by_asc(entity::foyer::Column::IdFoyer)
            .one(self.db)
            .await?;

        match foyer {
            Some(foyer) => Ok(Some(self.with_blocs(foyer).await?)),
            None => Ok(None),
        }
    }

    /// Deletes a foyer. Blocs and the owning university keep existing with a null link.
    ///
    /// # Returns
    /// - `Ok(true)` - Foyer deleted
    /// - `Ok(false)` - No foyer with this id
    /// Detaches the foyer from its blocs and its university, then deletes it.
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Bloc::update_many()
            .col_expr(entity::bloc::Column::FoyerId, Expr::value(Option::<i32>::None))
            .filter(entity::bloc::Column::FoyerId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Universite::update_many()
            .col_expr(entity::universite::Column::FoyerId, Expr::value(Option::<i32>::None))
            .filter(entity::universite::Column::FoyerId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Foyer::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_blocs(&self, foyer: entity::foyer::Model) -> Result<Foyer, DbErr> {
        let blocs = entity::prelude::Bloc::find()
            .filter(entity::bloc::Column::FoyerId.eq(foyer.id_foyer))
            .order_by_asc(entity::bloc::Column::IdBloc)
            .all(self.db)
            .await?;

        Ok(Foyer::from_entity(foyer, blocs))
    }
}
