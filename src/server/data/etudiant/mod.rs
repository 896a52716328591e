use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::etudiant::{Etudiant, UpsertEtudiantParams};

#[cfg(test)]
mod test;

pub struct EtudiantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EtudiantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Updates the student when `id_etudiant` matches an existing row, inserts it
    /// otherwise. Reservation links are left untouched.
    pub async fn upsert(&self, params: UpsertEtudiantParams) -> Result<Etudiant, DbErr> {
        let existing = match params.id_etudiant {
            Some(id) => entity::prelude::Etudiant::find_by_id(id).one(self.db).await?,
            None => None,
        };

        let etudiant = match existing {
            Some(etudiant) => {
                let mut active_model: entity::etudiant::ActiveModel = etudiant.into();
                active_model.nom_et = ActiveValue::Set(params.nom_et);
                active_model.prenom_et = ActiveValue::Set(params.prenom_et);
                active_model.cin = ActiveValue::Set(params.cin);
                active_model.ecole = ActiveValue::Set(params.ecole);
                active_model.date_naissance = ActiveValue::Set(params.date_naissance);
                active_model.update(self.db).await?
            }
            None => {
                entity::etudiant::ActiveModel {
                    nom_et: ActiveValue::Set(params.nom_et),
                    prenom_et: ActiveValue::Set(params.prenom_et),
                    cin: ActiveValue::Set(params.cin),
                    ecole: ActiveValue::Set(params.ecole),
                    date_naissance: ActiveValue::Set(params.date_naissance),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        self.with_reservations(etudiant).await
    }

    pub async fn find_all(&self) -> Result<Vec<Etudiant>, DbErr> {
        let etudiants = entity::prelude::Etudiant::find()
            .find_with_related(entity::prelude::ReservationEtudiant)
            .order_by_asc(entity::etudiant::Column::IdEtudiant)
            .all(self.db)
            .await?;

        Ok(etudiants
            .into_iter()
            .map(|(etudiant, links)| {
                let reservations = links.into_iter().map(|l| l.reservation_id).collect();
                Etudiant::from_entity(etudiant, reservations)
            })
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Etudiant>, DbErr> {
        match entity::prelude::Etudiant::find_by_id(id).one(self.db).await? {
            Some(etudiant) => Ok(Some(self.with_reservations(etudiant).await?)),
            None => Ok(None),
        }
    }

    pub async fn find_by_cin(&self, cin: i64) -> Result<Option<Etudiant>, DbErr> {
        let etudiant = entity::prelude::Etudiant::find()
            .filter(entity::etudiant::Column::Cin.eq(cin))
            .one(self.db)
            .await?;

        match etudiant {
            Some(etudiant) => Ok(Some(self.with_reservations(etudiant).await?)),
            None => Ok(None),
        }
    }

    /// Gets every student whose last name is exactly `nom_et`.
    pub async fn find_by_nom(&self, nom_et: &str) -> Result<Vec<Etudiant>, DbErr> {
        let etudiants = entity::prelude::Etudiant::find()
            .find_with_related(entity::prelude::ReservationEtudiant)
            .filter(entity::etudiant::Column::NomEt.eq(nom_et))
            .order_by_asc(entity::etudiant::Column::IdEtudiant)
            .all(self.db)
            .await?;

        Ok(etudiants
            .into_iter()
            .map(|(etudiant, links)| {
                let reservations = links.into_iter().map(|l| l.reservation_id).collect();
                Etudiant::from_entity(etudiant, reservations)
            })
            .collect())
    }

    /// Finds a student by first and last name. The first match wins on homonyms.
    pub async fn find_by_nom_and_prenom(
        &self,
        nom_et: &str,
        prenom_et: &str,
    ) -> Result<Option<Etudiant>, DbErr> {
        let etudiant = entity::prelude::Etudiant::find()
            .filter(entity::etudiant::Column::NomEt.eq(nom_et))
            .filter(entity::etudiant::Column::PrenomEt.eq(prenom_et))
            .order_by_asc(entity::etudiant::Column::IdEtudiant)
            .one(self.db)
            .await?;

        match etudiant {
            Some(etudiant) => Ok(Some(self.with_reservations(etudiant).await?)),
            None => Ok(None),
        }
    }

    /// Links a reservation to a student. Does nothing when the link already exists.
    pub async fn link_reservation(&self, etudiant_id: i32, reservation_id: &str) -> Result<(), DbErr> {
        let existing = entity::prelude::ReservationEtudiant::find_by_id((
            reservation_id.to_string(),
            etudiant_id,
        ))
        .one(self.db)
        .await?;

        if existing.is_none() {
            entity::reservation_etudiant::ActiveModel {
                reservation_id: ActiveValue::Set(reservation_id.to_string()),
                etudiant_id: ActiveValue::Set(etudiant_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Removes the link between a reservation and a student, if any.
    pub async fn unlink_reservation(
        &self,
        etudiant_id: i32,
        reservation_id: &str,
    ) -> Result<(), DbErr> {
        entity::prelude::ReservationEtudiant::delete_by_id((reservation_id.to_string(), etudiant_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a student together with its reservation links.
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::ReservationEtudiant::delete_many()
            .filter(entity::reservation_etudiant::Column::EtudiantId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Etudiant::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_reservations(&self, etudiant: entity::etudiant::Model) -> Result<Etudiant, DbErr> {
        let reservations = entity::prelude::ReservationEtudiant::find()
            .filter(entity::reservation_etudiant::Column::EtudiantId.eq(etudiant.id_etudiant))
            .order_by_asc(entity::reservation_etudiant::Column::ReservationId)
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.reservation_id)
            .collect();

        Ok(Etudiant::from_entity(etudiant, reservations))
    }
}
