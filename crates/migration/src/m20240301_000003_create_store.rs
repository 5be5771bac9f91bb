//! Create `store` table. A user owns at most one store.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Store::Table)
                    .if_not_exists()
                    .col(uuid(Store::Id).primary_key())
                    .col(uuid(Store::UserId).unique_key())
                    .col(string_len(Store::Name, 128))
                    .col(text_null(Store::Description))
                    .col(string_len(Store::StoreType, 32))
                    .col(string_len_null(Store::Phone, 32))
                    .col(string_len_null(Store::Email, 255))
                    .col(string_len_null(Store::OpenTime, 5))
                    .col(string_len_null(Store::CloseTime, 5))
                    .col(string_len_null(Store::OpenDays, 64))
                    .col(timestamp_with_time_zone(Store::CreatedAt))
                    .col(timestamp_with_time_zone(Store::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_store_user")
                            .from(Store::Table, Store::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Store::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Store { Table, Id, UserId, Name, Description, StoreType, Phone, Email, OpenTime, CloseTime, OpenDays, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }
