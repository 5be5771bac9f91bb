//! Create `pet` table owned by a user.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pet::Table)
                    .if_not_exists()
                    .col(uuid(Pet::Id).primary_key())
                    .col(uuid(Pet::UserId))
                    .col(string_len(Pet::Name, 64))
                    .col(string_len(Pet::Species, 32))
                    .col(string_len(Pet::Gender, 32))
                    .col(string_len_null(Pet::Breed, 64))
                    .col(double_null(Pet::Weight))
                    .col(date_null(Pet::BirthDate))
                    .col(date_null(Pet::AdoptionDate))
                    .col(text_null(Pet::Notes))
                    .col(timestamp_with_time_zone(Pet::CreatedAt))
                    .col(timestamp_with_time_zone(Pet::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pet_user")
                            .from(Pet::Table, Pet::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pet::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Pet { Table, Id, UserId, Name, Species, Gender, Breed, Weight, BirthDate, AdoptionDate, Notes, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }
