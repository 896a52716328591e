use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` (or all of them with
/// `with_housing_tables()`), then call `build()` to get a ready `TestContext`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Bloc, Chambre};
///
/// let test = TestBuilder::new()
///     .with_table(Bloc)
///     .with_table(Chambre)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the SeaORM entity using SQLite syntax.
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the foyer, bloc and chambre tables in dependency order.
    ///
    /// Enough for room and block operations that never touch reservations.
    pub fn with_building_tables(self) -> Self {
        self.with_table(Foyer).with_table(Bloc).with_table(Chambre)
    }

    /// Adds every housing table in dependency order:
    /// Foyer, Universite, Bloc, Chambre, Etudiant, Reservation, ReservationEtudiant.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_housing_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_housing_tables(self) -> Self {
        self.with_table(Foyer)
            .with_table(Universite)
            .with_table(Bloc)
            .with_table(Chambre)
            .with_table(Etudiant)
            .with_table(Reservation)
            .with_table(ReservationEtudiant)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
