pub use sea_orm_migration::prelude::*;

mod m20251006_000001_create_foyer_table;
mod m20251006_000002_create_universite_table;
mod m20251006_000003_create_bloc_table;
mod m20251006_000004_create_chambre_table;
mod m20251006_000005_create_etudiant_table;
mod m20251006_000006_create_reservation_table;
mod m20251006_000007_create_reservation_etudiant_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251006_000001_create_foyer_table::Migration),
            Box::new(m20251006_000002_create_universite_table::Migration),
            Box::new(m20251006_000003_create_bloc_table::Migration),
            Box::new(m20251006_000004_create_chambre_table::Migration),
            Box::new(m20251006_000005_create_etudiant_table::Migration),
            Box::new(m20251006_000006_create_reservation_table::Migration),
            Box::new(m20251006_000007_create_reservation_etudiant_table::Migration),
        ]
    }
}
