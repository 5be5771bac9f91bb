//! Create `pet_store`, the 1:1 extension of a PET_STORE store.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PetStore::Table)
                    .if_not_exists()
                    .col(uuid(PetStore::Id).primary_key())
                    .col(uuid(PetStore::StoreId).unique_key())
                    .col(boolean(PetStore::HasGrooming).default(false))
                    .col(boolean(PetStore::HasBoarding).default(false))
                    .col(boolean(PetStore::SellsLiveAnimals).default(false))
                    .col(timestamp_with_time_zone(PetStore::CreatedAt))
                    .col(timestamp_with_time_zone(PetStore::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pet_store_store")
                            .from(PetStore::Table, PetStore::StoreId)
                            .to(Store::Table, Store::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PetStore::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PetStore { Table, Id, StoreId, HasGrooming, HasBoarding, SellsLiveAnimals, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Store { Table, Id }
