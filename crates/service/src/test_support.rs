#![cfg(test)]
//! Fresh migrated in-memory database per test, plus row fixtures.

use chrono::Utc;
use common::types::{ProductCategory, StoreType};
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;
use models::{offering, product, service_provider, store, user, vet, vet_store};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn make_user(db: &DatabaseConnection, username: &str) -> anyhow::Result<user::Model> {
    let now = Utc::now().fixed_offset();
    Ok(user::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(username.into()),
        email: Set(format!("{username}@example.com")),
        password: Set("hash".into()),
        first_name: Set("Test".into()),
        last_name: Set("User".into()),
        phone: Set(None),
        avatar_url: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?)
}

pub async fn make_store(db: &DatabaseConnection, owner: Uuid, store_type: StoreType) -> anyhow::Result<store::Model> {
    let now = Utc::now().fixed_offset();
    Ok(store::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(owner),
        name: Set("Store".into()),
        description: Set(None),
        store_type: Set(store_type),
        phone: Set(None),
        email: Set(None),
        open_time: Set(None),
        close_time: Set(None),
        open_days: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?)
}

pub async fn make_vet_store(db: &DatabaseConnection, store_id: Uuid) -> anyhow::Result<vet_store::Model> {
    let now = Utc::now().fixed_offset();
    Ok(vet_store::ActiveModel {
        id: Set(Uuid::new_v4()),
        store_id: Set(store_id),
        emergency_service: Set(false),
        license_number: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?)
}

pub async fn make_vet(db: &DatabaseConnection, last_name: &str) -> anyhow::Result<vet::Model> {
    let now = Utc::now().fixed_offset();
    Ok(vet::ActiveModel {
        id: Set(Uuid::new_v4()),
        first_name: Set("Dr".into()),
        last_name: Set(last_name.into()),
        specialty: Set(None),
        phone: Set(None),
        email: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?)
}

pub async fn make_offering(db: &DatabaseConnection, name: &str) -> anyhow::Result<offering::Model> {
    let now = Utc::now().fixed_offset();
    Ok(offering::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.into()),
        description: Set(None),
        price: Set(25.0),
        duration_minutes: Set(Some(30)),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?)
}

pub async fn make_service_provider(db: &DatabaseConnection, owner: Uuid, name: &str) -> anyhow::Result<service_provider::Model> {
    let now = Utc::now().fixed_offset();
    Ok(service_provider::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(owner),
        name: Set(name.into()),
        description: Set(None),
        phone: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?)
}

pub async fn make_product(db: &DatabaseConnection, store_id: Uuid, name: &str, category: ProductCategory) -> anyhow::Result<product::Model> {
    let now = Utc::now().fixed_offset();
    Ok(product::ActiveModel {
        id: Set(Uuid::new_v4()),
        store_id: Set(store_id),
        name: Set(name.into()),
        description: Set(None),
        price: Set(9.99),
        category: Set(category),
        stock: Set(10),
        image_url: Set(None),
        average_rating: Set(0.0),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?)
}
