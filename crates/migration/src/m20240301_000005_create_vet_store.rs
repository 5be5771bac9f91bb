//! Create `vet_store`, the 1:1 extension of a VET_STORE store.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VetStore::Table)
                    .if_not_exists()
                    .col(uuid(VetStore::Id).primary_key())
                    .col(uuid(VetStore::StoreId).unique_key())
                    .col(boolean(VetStore::EmergencyService).default(false))
                    .col(string_len_null(VetStore::LicenseNumber, 64))
                    .col(timestamp_with_time_zone(VetStore::CreatedAt))
                    .col(timestamp_with_time_zone(VetStore::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vet_store_store")
                            .from(VetStore::Table, VetStore::StoreId)
                            .to(Store::Table, Store::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(VetStore::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum VetStore { Table, Id, StoreId, EmergencyService, LicenseNumber, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Store { Table, Id }
