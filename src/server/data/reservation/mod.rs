use chrono::NaiveDate;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, TransactionTrait,
};

use crate::server::model::reservation::{
    CreateReservationParams, Reservation, UpsertReservationParams,
};

#[cfg(test)]
mod test;

pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a reservation and links it to the given students.
    ///
    /// The reservation and its links are written in one transaction; a failed link
    /// leaves no reservation behind.
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, DbErr> {
        let txn = self.db.begin().await?;

        let reservation = entity::reservation::ActiveModel {
            id_reservation: ActiveValue::Set(params.id_reservation),
            annee_universitaire: ActiveValue::Set(params.annee_universitaire),
            est_valide: ActiveValue::Set(params.est_valide),
            chambre_id: ActiveValue::Set(params.chambre_id),
        }
        .insert(&txn)
        .await?;

        for etudiant_id in params.etudiant_ids {
            entity::reservation_etudiant::ActiveModel {
                reservation_id: ActiveValue::Set(reservation.id_reservation.clone()),
                etudiant_id: ActiveValue::Set(etudiant_id),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        self.find_by_id(&reservation.id_reservation)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation {} not found after creation",
                reservation.id_reservation
            )))
    }

    /// Makes a cancelled reservation valid again for a new booking.
    ///
    /// Refreshes the anchor date and the room, then links the students that are not
    /// linked yet. Everything is written in one transaction.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - The reactivated reservation
    /// - `Ok(None)` - No reservation with this id
    pub async fn reactivate(&self, params: CreateReservationParams) -> Result<Option<Reservation>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(reservation) =
            entity::prelude::Reservation::find_by_id(params.id_reservation.clone())
                .one(&txn)
                .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::reservation::ActiveModel = reservation.into();
        active_model.annee_universitaire = ActiveValue::Set(params.annee_universitaire);
        active_model.est_valide = ActiveValue::Set(true);
        active_model.chambre_id = ActiveValue::Set(params.chambre_id);
        active_model.update(&txn).await?;

        for etudiant_id in params.etudiant_ids {
            let linked = entity::prelude::ReservationEtudiant::find_by_id((
                params.id_reservation.clone(),
                etudiant_id,
            ))
            .one(&txn)
            .await?
            .is_some();

            if !linked {
                entity::reservation_etudiant::ActiveModel {
                    reservation_id: ActiveValue::Set(params.id_reservation.clone()),
                    etudiant_id: ActiveValue::Set(etudiant_id),
                }
                .insert(&txn)
                .await?;
            }
        }

        txn.commit().await?;

        self.find_by_id(&params.id_reservation).await
    }

    /// Updates the reservation's columns when the id exists, inserts it otherwise.
    pub async fn upsert(&self, params: UpsertReservationParams) -> Result<Reservation, DbErr> {
        let existing = entity::prelude::Reservation::find_by_id(params.id_reservation.clone())
            .one(self.db)
            .await?;

        let reservation = match existing {
            Some(reservation) => {
                let mut active_model: entity::reservation::ActiveModel = reservation.into();
                active_model.annee_universitaire = ActiveValue::Set(params.annee_universitaire);
                active_model.est_valide = ActiveValue::Set(params.est_valide);
                active_model.chambre_id = ActiveValue::Set(params.chambre_id);
                active_model.update(self.db).await?
            }
            None => {
                entity::reservation::ActiveModel {
                    id_reservation: ActiveValue::Set(params.id_reservation),
                    annee_universitaire: ActiveValue::Set(params.annee_universitaire),
                    est_valide: ActiveValue::Set(params.est_valide),
                    chambre_id: ActiveValue::Set(params.chambre_id),
                }
                .insert(self.db)
                .await?
            }
        };

        self.find_by_id(&reservation.id_reservation)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation {} not found after update",
                reservation.id_reservation
            )))
    }

    pub async fn find_all(&self) -> Result<Vec<Reservation>, DbErr> {
        let reservations = entity::prelude::Reservation::find()
            .find_with_related(entity::prelude::Etudiant)
            .order_by_asc(entity::reservation::Column::IdReservation)
            .all(self.db)
            .await?;

        Ok(reservations
            .into_iter()
            .map(|(reservation, etudiants)| Reservation::from_entity(reservation, etudiants))
            .collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(id.to_string())
            .find_with_related(entity::prelude::Etudiant)
            .all(self.db)
            .await?
            .into_iter()
            .next();

        Ok(reservation.map(|(reservation, etudiants)| Reservation::from_entity(reservation, etudiants)))
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts the valid reservations of a room anchored between `debut` and `fin`
    /// inclusive.
    pub async fn count_valid_by_chambre_between(
        &self,
        chambre_id: i32,
        debut: NaiveDate,
        fin: NaiveDate,
    ) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ChambreId.eq(chambre_id))
            .filter(entity::reservation::Column::EstValide.eq(true))
            .filter(entity::reservation::Column::AnneeUniversitaire.between(debut, fin))
            .count(self.db)
            .await
    }

    /// Counts every reservation anchored between `debut` and `fin` inclusive,
    /// whatever its validity.
    pub async fn count_between(&self, debut: NaiveDate, fin: NaiveDate) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::AnneeUniversitaire.between(debut, fin))
            .count(self.db)
            .await
    }

    /// Gets the identifiers of the valid reservations anchored between `debut` and
    /// `fin` inclusive.
    pub async fn find_valid_ids_between(
        &self,
        debut: NaiveDate,
        fin: NaiveDate,
    ) -> Result<Vec<String>, DbErr> {
        let reservations = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::EstValide.eq(true))
            .filter(entity::reservation::Column::AnneeUniversitaire.between(debut, fin))
            .order_by_asc(entity::reservation::Column::IdReservation)
            .all(self.db)
            .await?;

        Ok(reservations.into_iter().map(|r| r.id_reservation).collect())
    }

    /// Finds the valid reservation held by the student with this cin.
    pub async fn find_valid_by_cin(&self, cin: i64) -> Result<Option<Reservation>, DbErr> {
        let reservation = entity::prelude::Reservation::find()
            .join(
                JoinType::InnerJoin,
                entity::reservation::Relation::ReservationEtudiant.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::reservation_etudiant::Relation::Etudiant.def(),
            )
            .filter(entity::etudiant::Column::Cin.eq(cin))
            .filter(entity::reservation::Column::EstValide.eq(true))
            .order_by_asc(entity::reservation::Column::IdReservation)
            .one(self.db)
            .await?;

        match reservation {
            Some(reservation) => self.find_by_id(&reservation.id_reservation).await,
            None => Ok(None),
        }
    }

    /// Sets the validity flag of a reservation.
    ///
    /// # Returns
    /// - `Ok(true)` - Reservation updated
    /// - `Ok(false)` - No reservation with this id
    pub async fn set_valide(&self, id: &str, est_valide: bool) -> Result<bool, DbErr> {
        let Some(reservation) = entity::prelude::Reservation::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let mut active_model: entity::reservation::ActiveModel = reservation.into();
        active_model.est_valide = ActiveValue::Set(est_valide);
        active_model.update(self.db).await?;

        Ok(true)
    }

    /// Sets or clears the room of a reservation.
    ///
    /// # Returns
    /// - `Ok(true)` - Reservation updated
    /// - `Ok(false)` - No reservation with this id
    pub async fn set_chambre(&self, id: &str, chambre_id: Option<i32>) -> Result<bool, DbErr> {
        let Some(reservation) = entity::prelude::Reservation::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let mut active_model: entity::reservation::ActiveModel = reservation.into();
        active_model.chambre_id = ActiveValue::Set(chambre_id);
        active_model.update(self.db).await?;

        Ok(true)
    }

    /// Detaches a reservation from its room, then deletes it with its student links.
    ///
    /// Both steps run in one transaction.
    pub async fn cancel(&self, id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Reservation::update_many()
            .col_expr(
                entity::reservation::Column::ChambreId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::reservation::Column::IdReservation.eq(id))
            .exec(&txn)
            .await?;

        let deleted = Self::delete_in(&txn, id).await?;

        txn.commit().await?;

        Ok(deleted)
    }

    /// Deletes a reservation together with its student links.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let deleted = Self::delete_in(&txn, id).await?;

        txn.commit().await?;

        Ok(deleted)
    }

    async fn delete_in(txn: &DatabaseTransaction, id: &str) -> Result<bool, DbErr> {
        entity::prelude::ReservationEtudiant::delete_many()
            .filter(entity::reservation_etudiant::Column::ReservationId.eq(id))
            .exec(txn)
            .await?;

        let result = entity::prelude::Reservation::delete_by_id(id.to_string())
            .exec(txn)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
