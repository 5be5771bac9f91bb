use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vet::Table)
                    .if_not_exists()
                    .col(uuid(Vet::Id).primary_key())
                    .col(string_len(Vet::FirstName, 64))
                    .col(string_len(Vet::LastName, 64))
                    .col(string_len_null(Vet::Specialty, 128))
                    .col(string_len_null(Vet::Phone, 32))
                    .col(string_len_null(Vet::Email, 255))
                    .col(timestamp_with_time_zone(Vet::CreatedAt))
                    .col(timestamp_with_time_zone(Vet::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vet::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vet { Table, Id, FirstName, LastName, Specialty, Phone, Email, CreatedAt, UpdatedAt }
