use sea_orm_migration::{prelude::*, schema::*};

use super::m20251006_000003_create_bloc_table::Bloc;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chambre::Table)
                    .if_not_exists()
                    .col(pk_auto(Chambre::IdChambre))
                    .col(big_integer_uniq(Chambre::NumeroChambre))
                    .col(string_len(Chambre::TypeC, 16).default("SIMPLE"))
                    .col(integer_null(Chambre::BlocId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chambre_bloc_id")
                            .from(Chambre::Table, Chambre::BlocId)
                            .to(Bloc::Table, Bloc::IdBloc)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chambre::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chambre {
    Table,
    IdChambre,
    NumeroChambre,
    TypeC,
    BlocId,
}
