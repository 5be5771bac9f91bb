//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_user;
mod m20240301_000002_create_pet;
mod m20240301_000003_create_store;
mod m20240301_000004_create_pet_store;
mod m20240301_000005_create_vet_store;
mod m20240301_000006_create_vet;
mod m20240301_000007_create_service;
mod m20240301_000008_create_service_provider;
mod m20240301_000009_create_memberships;
mod m20240301_000010_create_product;
mod m20240301_000011_create_review;
mod m20240301_000012_create_appointment;
mod m20240301_000013_create_location;
mod m20240301_000020_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_user::Migration),
            Box::new(m20240301_000002_create_pet::Migration),
            Box::new(m20240301_000003_create_store::Migration),
            Box::new(m20240301_000004_create_pet_store::Migration),
            Box::new(m20240301_000005_create_vet_store::Migration),
            Box::new(m20240301_000006_create_vet::Migration),
            Box::new(m20240301_000007_create_service::Migration),
            Box::new(m20240301_000008_create_service_provider::Migration),
            Box::new(m20240301_000009_create_memberships::Migration),
            Box::new(m20240301_000010_create_product::Migration),
            Box::new(m20240301_000011_create_review::Migration),
            Box::new(m20240301_000012_create_appointment::Migration),
            Box::new(m20240301_000013_create_location::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000020_add_indexes::Migration),
        ]
    }
}
