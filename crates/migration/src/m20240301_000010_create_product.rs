//! Create `product`, the catalogue of a store.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(uuid(Product::Id).primary_key())
                    .col(uuid(Product::StoreId))
                    .col(string_len(Product::Name, 128))
                    .col(text_null(Product::Description))
                    .col(double(Product::Price))
                    .col(string_len(Product::Category, 32))
                    .col(integer(Product::Stock).default(0))
                    .col(text_null(Product::ImageUrl))
                    .col(double(Product::AverageRating).default(0.0))
                    .col(timestamp_with_time_zone(Product::CreatedAt))
                    .col(timestamp_with_time_zone(Product::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_store")
                            .from(Product::Table, Product::StoreId)
                            .to(Store::Table, Store::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product { Table, Id, StoreId, Name, Description, Price, Category, Stock, ImageUrl, AverageRating, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Store { Table, Id }
