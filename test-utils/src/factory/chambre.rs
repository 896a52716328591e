//! Chambre factory for creating test room entities.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::TypeChambre;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// Defaults to a SIMPLE room with a unique number.
pub struct ChambreFactory<'a> {
    db: &'a DatabaseConnection,
    numero_chambre: i64,
    type_c: TypeChambre,
    bloc_id: Option<i32>,
}

impl<'a> ChambreFactory<'a> {
    /// Creates a new ChambreFactory with a unique room number.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `bloc_id` - Bloc the room belongs to, if any
    pub fn new(db: &'a DatabaseConnection, bloc_id: Option<i32>) -> Self {
        Self {
            db,
            numero_chambre: 1000 + next_id() as i64,
            type_c: TypeChambre::Simple,
            bloc_id,
        }
    }

    /// Sets the room number.
    pub fn numero_chambre(mut self, numero_chambre: i64) -> Self {
        self.numero_chambre = numero_chambre;
        self
    }

    /// Sets the room type.
    pub fn type_c(mut self, type_c: TypeChambre) -> Self {
        self.type_c = type_c;
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::chambre::Model, DbErr> {
        entity::chambre::ActiveModel {
            id_chambre: ActiveValue::NotSet,
            numero_chambre: ActiveValue::Set(self.numero_chambre),
            type_c: ActiveValue::Set(self.type_c),
            bloc_id: ActiveValue::Set(self.bloc_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a SIMPLE room with default values in the given bloc.
pub async fn create_chambre(
    db: &DatabaseConnection,
    bloc_id: Option<i32>,
) -> Result<entity::chambre::Model, DbErr> {
    ChambreFactory::new(db, bloc_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers::create_chambre_with_dependencies;

    #[tokio::test]
    async fn creates_chambre_with_dependencies() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_building_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (foyer, bloc, chambre) = create_chambre_with_dependencies(db).await?;

        assert_eq!(bloc.foyer_id, Some(foyer.id_foyer));
        assert_eq!(chambre.bloc_id, Some(bloc.id_bloc));
        assert_eq!(chambre.type_c, TypeChambre::Simple);

        Ok(())
    }

    #[tokio::test]
    async fn creates_chambre_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_building_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let chambre = ChambreFactory::new(db, None)
            .numero_chambre(303)
            .type_c(TypeChambre::Triple)
            .build()
            .await?;

        assert_eq!(chambre.numero_chambre, 303);
        assert_eq!(chambre.type_c, TypeChambre::Triple);
        assert!(chambre.bloc_id.is_none());

        Ok(())
    }
}
