//! Universite factory for creating test university entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test universities with customizable fields.
pub struct UniversiteFactory<'a> {
    db: &'a DatabaseConnection,
    nom_universite: String,
    adresse: String,
    foyer_id: Option<i32>,
}

impl<'a> UniversiteFactory<'a> {
    /// Creates a new UniversiteFactory with a unique name and no foyer.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            nom_universite: format!("Universite {}", next_id()),
            adresse: "Tunis".to_string(),
            foyer_id: None,
        }
    }

    /// Sets the university name.
    pub fn nom_universite(mut self, nom_universite: impl Into<String>) -> Self {
        self.nom_universite = nom_universite.into();
        self
    }

    /// Sets the university address.
    pub fn adresse(mut self, adresse: impl Into<String>) -> Self {
        self.adresse = adresse.into();
        self
    }

    /// Links the university to a foyer.
    pub fn foyer_id(mut self, foyer_id: Option<i32>) -> Self {
        self.foyer_id = foyer_id;
        self
    }

    /// Builds and inserts the university entity into the database.
    pub async fn build(self) -> Result<entity::universite::Model, DbErr> {
        entity::universite::ActiveModel {
            id_universite: ActiveValue::NotSet,
            nom_universite: ActiveValue::Set(self.nom_universite),
            adresse: ActiveValue::Set(self.adresse),
            foyer_id: ActiveValue::Set(self.foyer_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a university with default values and no foyer.
pub async fn create_universite(
    db: &DatabaseConnection,
) -> Result<entity::universite::Model, DbErr> {
    UniversiteFactory::new(db).build().await
}
