use sea_orm_migration::{prelude::*, schema::*};

use super::m20251006_000001_create_foyer_table::Foyer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Universite::Table)
                    .if_not_exists()
                    .col(pk_auto(Universite::IdUniversite))
                    .col(string(Universite::NomUniversite))
                    .col(string(Universite::Adresse).default(""))
                    .col(integer_null(Universite::FoyerId).unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_universite_foyer_id")
                            .from(Universite::Table, Universite::FoyerId)
                            .to(Foyer::Table, Foyer::IdFoyer)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Universite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Universite {
    Table,
    IdUniversite,
    NomUniversite,
    Adresse,
    FoyerId,
}
