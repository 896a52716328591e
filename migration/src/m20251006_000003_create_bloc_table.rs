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
                    .table(Bloc::Table)
                    .if_not_exists()
                    .col(pk_auto(Bloc::IdBloc))
                    .col(string(Bloc::NomBloc))
                    .col(big_integer(Bloc::CapaciteBloc).default(0))
                    .col(integer_null(Bloc::FoyerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bloc_foyer_id")
                            .from(Bloc::Table, Bloc::FoyerId)
                            .to(Foyer::Table, Foyer::IdFoyer)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bloc_nom_bloc")
                    .table(Bloc::Table)
                    .col(Bloc::NomBloc)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bloc::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bloc {
    Table,
    IdBloc,
    NomBloc,
    CapaciteBloc,
    FoyerId,
}
