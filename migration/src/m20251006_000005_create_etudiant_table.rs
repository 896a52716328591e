use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Etudiant::Table)
                    .if_not_exists()
                    .col(pk_auto(Etudiant::IdEtudiant))
                    .col(string(Etudiant::NomEt))
                    .col(string(Etudiant::PrenomEt))
                    .col(big_integer_uniq(Etudiant::Cin))
                    .col(string(Etudiant::Ecole).default(""))
                    .col(date(Etudiant::DateNaissance))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Etudiant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Etudiant {
    Table,
    IdEtudiant,
    NomEt,
    PrenomEt,
    Cin,
    Ecole,
    DateNaissance,
}
