use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    bloc::{Bloc, BlocWithChambres, UpsertBlocParams},
    chambre::Chambre,
};

#[cfg(test)]
mod test;

pub struct BlocRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlocRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Updates the bloc when `id_bloc` matches an existing row, inserts it otherwise.
    pub async fn upsert(&self, params: UpsertBlocParams) -> Result<Bloc, DbErr> {
        let existing = match params.id_bloc {
            Some(id) => entity::prelude::Bloc::find_by_id(id).one(self.db).await?,
            None => None,
        };

        let bloc = match existing {
            Some(bloc) => {
                let mut active_model: entity::bloc::ActiveModel = bloc.into();
                active_model.nom_bloc = ActiveValue::Set(params.nom_bloc);
                active_model.capacite_bloc = ActiveValue::Set(params.capacite_bloc);
                active_model.foyer_id = ActiveValue::Set(params.foyer_id);
                active_model.update(self.db).await?
            }
            None => {
                entity::bloc::ActiveModel {
                    nom_bloc: ActiveValue::Set(params.nom_bloc),
                    capacite_bloc: ActiveValue::Set(params.capacite_bloc),
                    foyer_id: ActiveValue::Set(params.foyer_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(Bloc::from_entity(bloc))
    }

    pub async fn find_all(&self) -> Result<Vec<Bloc>, DbErr> {
        let blocs = entity::prelude::Bloc::find()
            .order_by_asc(entity::bloc::Column::IdBloc)
            .all(self.db)
            .await?;

        Ok(blocs.into_iter().map(Bloc::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Bloc>, DbErr> {
        let bloc = entity::prelude::Bloc::find_by_id(id).one(self.db).await?;

        Ok(bloc.map(Bloc::from_entity))
    }

    /// Finds a bloc by name. The first match wins when names are duplicated.
    pub async fn find_by_nom(&self, nom_bloc: &str) -> Result<Option<Bloc>, DbErr> {
        let bloc = entity::prelude::Bloc::find()
            .filter(entity::bloc::Column::NomBloc.eq(nom_bloc))
            .order_by_asc(entity::bloc::Column::IdBloc)
            .one(self.db)
            .await?;

        Ok(bloc.map(Bloc::from_entity))
    }

    /// Lists every bloc with its rooms, ordered by bloc then room number.
    pub async fn find_all_with_chambres(&self) -> Result<Vec<BlocWithChambres>, DbErr> {
        let blocs = entity::prelude::Bloc::find()
            .find_with_related(entity::prelude::Chambre)
            .order_by_asc(entity::bloc::Column::IdBloc)
            .order_by_asc(entity::chambre::Column::NumeroChambre)
            .all(self.db)
            .await?;

        Ok(blocs
            .into_iter()
            .map(|(bloc, chambres)| BlocWithChambres {
                bloc: Bloc::from_entity(bloc),
                chambres: chambres.into_iter().map(Chambre::from_entity).collect(),
            })
            .collect())
    }

    /// Sets or clears the foyer of a bloc.
    ///
    /// # Returns
    /// - `Ok(Some(Bloc))` - Updated bloc
    /// - `Ok(None)` - No bloc with this id
    pub async fn set_foyer(&self, id_bloc: i32, foyer_id: Option<i32>) -> Result<Option<Bloc>, DbErr> {
        let Some(bloc) = entity::prelude::Bloc::find_by_id(id_bloc).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::bloc::ActiveModel = bloc.into();
        active_model.foyer_id = ActiveValue::Set(foyer_id);
        let bloc = active_model.update(self.db).await?;

        Ok(Some(Bloc::from_entity(bloc)))
    }

    /// Deletes a bloc. Its rooms keep existing with a null bloc.
    /// Detaches the bloc's rooms, then deletes the bloc.
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Chambre::update_many()
            .col_expr(entity::chambre::Column::BlocId, Expr::value(Option::<i32>::None))
            .filter(entity::chambre::Column::BlocId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Bloc::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
