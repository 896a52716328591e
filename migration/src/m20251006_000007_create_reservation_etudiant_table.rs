use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251006_000005_create_etudiant_table::Etudiant,
    m20251006_000006_create_reservation_table::Reservation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReservationEtudiant::Table)
                    .if_not_exists()
                    .col(string(ReservationEtudiant::ReservationId))
                    .col(integer(ReservationEtudiant::EtudiantId))
                    .primary_key(
                        Index::create()
                            .col(ReservationEtudiant::ReservationId)
                            .col(ReservationEtudiant::EtudiantId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_etudiant_reservation_id")
                            .from(
                                ReservationEtudiant::Table,
                                ReservationEtudiant::ReservationId,
                            )
                            .to(Reservation::Table, Reservation::IdReservation)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_etudiant_etudiant_id")
                            .from(ReservationEtudiant::Table, ReservationEtudiant::EtudiantId)
                            .to(Etudiant::Table, Etudiant::IdEtudiant)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReservationEtudiant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReservationEtudiant {
    Table,
    ReservationId,
    EtudiantId,
}
