//! Create the many-to-many join tables:
//! `vet_store_vet`, `vet_store_service` and `service_provider_service`.
//! Each row is keyed by the (owner, member) pair and cascades from both sides.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

fn join_table(
    table: impl IntoIden + Copy + 'static,
    owner_col: impl IntoIden + Copy + 'static,
    owner_table: impl IntoIden + Copy + 'static,
    member_col: impl IntoIden + Copy + 'static,
    member_table: impl IntoIden + Copy + 'static,
    name: &str,
) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(uuid(owner_col))
        .col(uuid(member_col))
        .primary_key(Index::create().col(owner_col).col(member_col))
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{name}_owner"))
                .from(table, owner_col)
                .to(owner_table, Shared::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{name}_member"))
                .from(table, member_col)
                .to(member_table, Shared::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(join_table(
                VetStoreVet::Table,
                VetStoreVet::VetStoreId,
                VetStore::Table,
                VetStoreVet::VetId,
                Vet::Table,
                "vet_store_vet",
            ))
            .await?;
        manager
            .create_table(join_table(
                VetStoreService::Table,
                VetStoreService::VetStoreId,
                VetStore::Table,
                VetStoreService::ServiceId,
                Service::Table,
                "vet_store_service",
            ))
            .await?;
        manager
            .create_table(join_table(
                ServiceProviderService::Table,
                ServiceProviderService::ServiceProviderId,
                ServiceProvider::Table,
                ServiceProviderService::ServiceId,
                Service::Table,
                "service_provider_service",
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceProviderService::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(VetStoreService::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(VetStoreVet::Table).to_owned()).await
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum VetStoreVet { Table, VetStoreId, VetId }

#[derive(DeriveIden, Clone, Copy)]
enum VetStoreService { Table, VetStoreId, ServiceId }

#[derive(DeriveIden, Clone, Copy)]
enum ServiceProviderService { Table, ServiceProviderId, ServiceId }

#[derive(DeriveIden, Clone, Copy)]
enum VetStore { Table }

#[derive(DeriveIden, Clone, Copy)]
enum Vet { Table }

#[derive(DeriveIden, Clone, Copy)]
enum Service { Table }

#[derive(DeriveIden, Clone, Copy)]
enum ServiceProvider { Table }

#[derive(DeriveIden, Clone, Copy)]
enum Shared { Id }
