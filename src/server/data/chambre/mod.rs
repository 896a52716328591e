use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    TransactionTrait,
};

use crate::{
    model::chambre::TypeChambre,
    server::model::chambre::{Chambre, UpsertChambreParams},
};

#[cfg(test)]
mod test;

pub struct ChambreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChambreRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Updates the room when `id_chambre` matches an existing row, inserts it otherwise.
    pub async fn upsert(&self, params: UpsertChambreParams) -> Result<Chambre, DbErr> {
        let existing = match params.id_chambre {
            Some(id) => entity::prelude::Chambre::find_by_id(id).one(self.db).await?,
            None => None,
        };

        let chambre = match existing {
            Some(chambre) => {
                let mut active_model: entity::chambre::ActiveModel = chambre.into();
                active_model.numero_chambre = ActiveValue::Set(params.numero_chambre);
                active_model.type_c = ActiveValue::Set(params.type_c.into());
                active_model.bloc_id = ActiveValue::Set(params.bloc_id);
                active_model.update(self.db).await?
            }
            None => {
                entity::chambre::ActiveModel {
                    numero_chambre: ActiveValue::Set(params.numero_chambre),
                    type_c: ActiveValue::Set(params.type_c.into()),
                    bloc_id: ActiveValue::Set(params.bloc_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(Chambre::from_entity(chambre))
    }

    pub async fn find_all(&self) -> Result<Vec<Chambre>, DbErr> {
        let chambres = entity::prelude::Chambre::find()
            .order_by_asc(entity::chambre::Column::NumeroChambre)
            .all(self.db)
            .await?;

        Ok(chambres.into_iter().map(Chambre::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Chambre>, DbErr> {
        let chambre = entity::prelude::Chambre::find_by_id(id).one(self.db).await?;

        Ok(chambre.map(Chambre::from_entity))
    }

    pub async fn find_by_numero(&self, numero_chambre: i64) -> Result<Option<Chambre>, DbErr> {
        let chambre = entity::prelude::Chambre::find()
            .filter(entity::chambre::Column::NumeroChambre.eq(numero_chambre))
            .one(self.db)
            .await?;

        Ok(chambre.map(Chambre::from_entity))
    }

    /// Gets the rooms of the bloc named `nom_bloc`.
    pub async fn find_by_nom_bloc(&self, nom_bloc: &str) -> Result<Vec<Chambre>, DbErr> {
        let chambres = entity::prelude::Chambre::find()
            .join(JoinType::InnerJoin, entity::chambre::Relation::Bloc.def())
            .filter(entity::bloc::Column::NomBloc.eq(nom_bloc))
            .order_by_asc(entity::chambre::Column::NumeroChambre)
            .all(self.db)
            .await?;

        Ok(chambres.into_iter().map(Chambre::from_entity).collect())
    }

    /// Gets the rooms of one type located in any bloc of the foyer named `nom_foyer`.
    pub async fn find_by_nom_foyer_and_type(
        &self,
        nom_foyer: &str,
        type_c: TypeChambre,
    ) -> Result<Vec<Chambre>, DbErr> {
        let type_c: entity::sea_orm_active_enums::TypeChambre = type_c.into();

        let chambres = entity::prelude::Chambre::find()
            .join(JoinType::InnerJoin, entity::chambre::Relation::Bloc.def())
            .join(JoinType::InnerJoin, entity::bloc::Relation::Foyer.def())
            .filter(entity::foyer::Column::NomFoyer.eq(nom_foyer))
            .filter(entity::chambre::Column::TypeC.eq(type_c))
            .order_by_asc(entity::chambre::Column::NumeroChambre)
            .all(self.db)
            .await?;

        Ok(chambres.into_iter().map(Chambre::from_entity).collect())
    }

    /// Counts the rooms of one type in a bloc.
    pub async fn count_by_type_and_bloc(
        &self,
        type_c: TypeChambre,
        id_bloc: i32,
    ) -> Result<u64, DbErr> {
        let type_c: entity::sea_orm_active_enums::TypeChambre = type_c.into();

        entity::prelude::Chambre::find()
            .filter(entity::chambre::Column::TypeC.eq(type_c))
            .filter(entity::chambre::Column::BlocId.eq(id_bloc))
            .count(self.db)
            .await
    }

    /// Counts rooms of one type, or every room when `type_c` is `None`.
    pub async fn count_by_type(&self, type_c: Option<TypeChambre>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Chambre::find();

        if let Some(type_c) = type_c {
            let type_c: entity::sea_orm_active_enums::TypeChambre = type_c.into();
            query = query.filter(entity::chambre::Column::TypeC.eq(type_c));
        }

        query.count(self.db).await
    }

    /// Sets `bloc_id` on every room whose number is listed.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rooms updated; unknown numbers are skipped
    pub async fn set_bloc_for_numeros(
        &self,
        numeros: &[i64],
        bloc_id: Option<i32>,
    ) -> Result<u64, DbErr> {
        if numeros.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Chambre::update_many()
            .col_expr(entity::chambre::Column::BlocId, Expr::value(bloc_id))
            .filter(entity::chambre::Column::NumeroChambre.is_in(numeros.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a room. Its reservations keep existing without a room.
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Reservation::update_many()
            .col_expr(
                entity::reservation::Column::ChambreId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::reservation::Column::ChambreId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Chambre::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
