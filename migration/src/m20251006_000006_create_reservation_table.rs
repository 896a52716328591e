use sea_orm_migration::{prelude::*, schema::*};

use super::m20251006_000004_create_chambre_table::Chambre;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(string(Reservation::IdReservation).primary_key())
                    .col(date(Reservation::AnneeUniversitaire))
                    .col(boolean(Reservation::EstValide).default(true))
                    .col(integer_null(Reservation::ChambreId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_chambre_id")
                            .from(Reservation::Table, Reservation::ChambreId)
                            .to(Chambre::Table, Chambre::IdChambre)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_annee_universitaire")
                    .table(Reservation::Table)
                    .col(Reservation::AnneeUniversitaire)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    IdReservation,
    AnneeUniversitaire,
    EstValide,
    ChambreId,
}
