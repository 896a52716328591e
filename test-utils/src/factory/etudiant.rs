//! Etudiant factory for creating test student entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// The default cin is unique per factory call.
pub struct EtudiantFactory<'a> {
    db: &'a DatabaseConnection,
    nom_et: String,
    prenom_et: String,
    cin: i64,
    ecole: String,
    date_naissance: NaiveDate,
}

impl<'a> EtudiantFactory<'a> {
    /// Creates a new EtudiantFactory with default values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nom_et: format!("Nom {}", id),
            prenom_et: format!("Prenom {}", id),
            cin: 10_000_000 + id as i64,
            ecole: "Esprit".to_string(),
            date_naissance: NaiveDate::from_ymd_opt(2001, 3, 14).unwrap_or_default(),
        }
    }

    /// Sets the last name.
    pub fn nom_et(mut self, nom_et: impl Into<String>) -> Self {
        self.nom_et = nom_et.into();
        self
    }

    /// Sets the first name.
    pub fn prenom_et(mut self, prenom_et: impl Into<String>) -> Self {
        self.prenom_et = prenom_et.into();
        self
    }

    /// Sets the national id number.
    pub fn cin(mut self, cin: i64) -> Self {
        self.cin = cin;
        self
    }

    /// Sets the school.
    pub fn ecole(mut self, ecole: impl Into<String>) -> Self {
        self.ecole = ecole.into();
        self
    }

    /// Sets the birth date.
    pub fn date_naissance(mut self, date_naissance: NaiveDate) -> Self {
        self.date_naissance = date_naissance;
        self
    }

    /// Builds and inserts the student entity into the database.
    pub async fn build(self) -> Result<entity::etudiant::Model, DbErr> {
        entity::etudiant::ActiveModel {
            id_etudiant: ActiveValue::NotSet,
            nom_et: ActiveValue::Set(self.nom_et),
            prenom_et: ActiveValue::Set(self.prenom_et),
            cin: ActiveValue::Set(self.cin),
            ecole: ActiveValue::Set(self.ecole),
            date_naissance: ActiveValue::Set(self.date_naissance),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
pub async fn create_etudiant(db: &DatabaseConnection) -> Result<entity::etudiant::Model, DbErr> {
    EtudiantFactory::new(db).build().await
}
