//! Bloc factory for creating test block entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test blocs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let bloc = BlocFactory::new(&db, Some(foyer.id_foyer))
///     .nom_bloc("Bloc A")
///     .build()
///     .await?;
/// ```
pub struct BlocFactory<'a> {
    db: &'a DatabaseConnection,
    nom_bloc: String,
    capacite_bloc: i64,
    foyer_id: Option<i32>,
}

impl<'a> BlocFactory<'a> {
    /// Creates a new BlocFactory with a unique name and a capacity of 50.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `foyer_id` - Foyer the bloc belongs to, if any
    pub fn new(db: &'a DatabaseConnection, foyer_id: Option<i32>) -> Self {
        Self {
            db,
            nom_bloc: format!("Bloc {}", next_id()),
            capacite_bloc: 50,
            foyer_id,
        }
    }

    /// Sets the bloc name.
    pub fn nom_bloc(mut self, nom_bloc: impl Into<String>) -> Self {
        self.nom_bloc = nom_bloc.into();
        self
    }

    /// Sets the bloc capacity.
    pub fn capacite_bloc(mut self, capacite_bloc: i64) -> Self {
        self.capacite_bloc = capacite_bloc;
        self
    }

    /// Builds and inserts the bloc entity into the database.
    pub async fn build(self) -> Result<entity::bloc::Model, DbErr> {
        entity::bloc::ActiveModel {
            id_bloc: ActiveValue::NotSet,
            nom_bloc: ActiveValue::Set(self.nom_bloc),
            capacite_bloc: ActiveValue::Set(self.capacite_bloc),
            foyer_id: ActiveValue::Set(self.foyer_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a bloc with default values in the given foyer.
pub async fn create_bloc(
    db: &DatabaseConnection,
    foyer_id: Option<i32>,
) -> Result<entity::bloc::Model, DbErr> {
    BlocFactory::new(db, foyer_id).build().await
}
