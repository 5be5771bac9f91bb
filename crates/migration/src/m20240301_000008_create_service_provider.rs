//! Create `service_provider`. A user runs at most one provider profile.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceProvider::Table)
                    .if_not_exists()
                    .col(uuid(ServiceProvider::Id).primary_key())
                    .col(uuid(ServiceProvider::UserId).unique_key())
                    .col(string_len(ServiceProvider::Name, 128))
                    .col(text_null(ServiceProvider::Description))
                    .col(string_len_null(ServiceProvider::Phone, 32))
                    .col(timestamp_with_time_zone(ServiceProvider::CreatedAt))
                    .col(timestamp_with_time_zone(ServiceProvider::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_provider_user")
                            .from(ServiceProvider::Table, ServiceProvider::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceProvider::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceProvider { Table, Id, UserId, Name, Description, Phone, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }
