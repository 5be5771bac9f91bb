//! Create `appointment` between a user (optionally for a pet) and a vet store.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(uuid(Appointment::Id).primary_key())
                    .col(uuid(Appointment::UserId))
                    .col(uuid(Appointment::VetStoreId))
                    .col(uuid_null(Appointment::PetId))
                    .col(timestamp_with_time_zone(Appointment::Date))
                    .col(integer(Appointment::DurationMinutes))
                    .col(string_len(Appointment::Status, 32))
                    .col(text_null(Appointment::Notes))
                    .col(timestamp_with_time_zone(Appointment::CreatedAt))
                    .col(timestamp_with_time_zone(Appointment::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_user")
                            .from(Appointment::Table, Appointment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_vet_store")
                            .from(Appointment::Table, Appointment::VetStoreId)
                            .to(VetStore::Table, VetStore::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_pet")
                            .from(Appointment::Table, Appointment::PetId)
                            .to(Pet::Table, Pet::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Appointment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Appointment { Table, Id, UserId, VetStoreId, PetId, Date, DurationMinutes, Status, Notes, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum VetStore { Table, Id }

#[derive(DeriveIden)]
enum Pet { Table, Id }
