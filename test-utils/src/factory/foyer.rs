//! Foyer factory for creating test dormitory entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test foyers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let foyer = FoyerFactory::new(&db)
///     .nom_foyer("Foyer Central")
///     .capacite_foyer(200)
///     .build()
///     .await?;
/// ```
pub struct FoyerFactory<'a> {
    db: &'a DatabaseConnection,
    nom_foyer: String,
    capacite_foyer: i64,
}

impl<'a> FoyerFactory<'a> {
    /// Creates a new FoyerFactory with a unique default name and a capacity of 100.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            nom_foyer: format!("Foyer {}", next_id()),
            capacite_foyer: 100,
        }
    }

    /// Sets the foyer name.
    pub fn nom_foyer(mut self, nom_foyer: impl Into<String>) -> Self {
        self.nom_foyer = nom_foyer.into();
        self
    }

    /// Sets the foyer capacity.
    pub fn capacite_foyer(mut self, capacite_foyer: i64) -> Self {
        self.capacite_foyer = capacite_foyer;
        self
    }

    /// Builds and inserts the foyer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::foyer::Model)` - Created foyer entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::foyer::Model, DbErr> {
        entity::foyer::ActiveModel {
            id_foyer: ActiveValue::NotSet,
            nom_foyer: ActiveValue::Set(self.nom_foyer),
            capacite_foyer: ActiveValue::Set(self.capacite_foyer),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a foyer with default values.
///
/// Shorthand for `FoyerFactory::new(db).build().await`.
pub async fn create_foyer(db: &DatabaseConnection) -> Result<entity::foyer::Model, DbErr> {
    FoyerFactory::new(db).build().await
}
