use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Foyer::Table)
                    .if_not_exists()
                    .col(pk_auto(Foyer::IdFoyer))
                    .col(string(Foyer::NomFoyer))
                    .col(big_integer(Foyer::CapaciteFoyer).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Foyer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Foyer {
    Table,
    IdFoyer,
    NomFoyer,
    CapaciteFoyer,
}
