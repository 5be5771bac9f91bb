//! Schema smoke tests against in-memory SQLite.

use chrono::Utc;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, ModelTrait, PaginatorTrait, Set};
use uuid::Uuid;

use common::types::{AppointmentStatus, Gender, Species, StoreType};

use crate::db::connect_with_config;
use crate::{appointment, offering, pet, store, user, vet, vet_store, vet_store_service, vet_store_vet};

async fn setup() -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn insert_user(db: &DatabaseConnection, name: &str) -> anyhow::Result<user::Model> {
    let now = Utc::now().fixed_offset();
    let row = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(name.into()),
        email: Set(format!("{name}@example.com")),
        password: Set("hash".into()),
        first_name: Set("First".into()),
        last_name: Set("Last".into()),
        phone: Set(None),
        avatar_url: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;
    Ok(row)
}

async fn insert_vet_store(db: &DatabaseConnection, owner: Uuid) -> anyhow::Result<vet_store::Model> {
    let now = Utc::now().fixed_offset();
    let store = store::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(owner),
        name: Set("Clinic".into()),
        description: Set(None),
        store_type: Set(StoreType::VetStore),
        phone: Set(None),
        email: Set(None),
        open_time: Set(Some("08:00".into())),
        close_time: Set(Some("18:00".into())),
        open_days: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;
    let vs = vet_store::ActiveModel {
        id: Set(Uuid::new_v4()),
        store_id: Set(store.id),
        emergency_service: Set(true),
        license_number: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;
    Ok(vs)
}

#[tokio::test]
async fn memory_url_selects_sqlite_backend() -> anyhow::Result<()> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    assert_eq!(db.get_database_backend(), DbBackend::Sqlite);
    Ok(())
}

#[tokio::test]
async fn migrations_apply_on_sqlite() -> anyhow::Result<()> {
    let db = setup().await?;
    assert_eq!(user::Entity::find().count(&db).await?, 0);
    assert_eq!(offering::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn enums_round_trip_through_text_columns() -> anyhow::Result<()> {
    let db = setup().await?;
    let owner = insert_user(&db, "alice").await?;
    let now = Utc::now().fixed_offset();
    let created = pet::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(owner.id),
        name: Set("Rex".into()),
        species: Set(Species::Dog),
        gender: Set(Gender::Male),
        breed: Set(None),
        weight: Set(Some(12.5)),
        birth_date: Set(None),
        adoption_date: Set(None),
        notes: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await?;

    let found = pet::Entity::find_by_id(created.id).one(&db).await?.expect("pet row");
    assert_eq!(found.species, Species::Dog);
    assert_eq!(found.gender, Gender::Male);
    let owner_row = found.find_related(user::Entity).one(&db).await?.expect("owner");
    assert_eq!(owner_row.id, owner.id);
    Ok(())
}

#[tokio::test]
async fn deleting_a_user_cascades_to_owned_rows() -> anyhow::Result<()> {
    let db = setup().await?;
    let owner = insert_user(&db, "bob").await?;
    let vs = insert_vet_store(&db, owner.id).await?;
    let now = Utc::now().fixed_offset();
    appointment::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(owner.id),
        vet_store_id: Set(vs.id),
        pet_id: Set(None),
        date: Set(now),
        duration_minutes: Set(30),
        status: Set(AppointmentStatus::Pending),
        notes: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await?;

    user::Entity::delete_by_id(owner.id).exec(&db).await?;

    assert_eq!(store::Entity::find().count(&db).await?, 0);
    assert_eq!(vet_store::Entity::find().count(&db).await?, 0);
    assert_eq!(appointment::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn join_rows_follow_their_parents() -> anyhow::Result<()> {
    let db = setup().await?;
    let owner = insert_user(&db, "carol").await?;
    let vs = insert_vet_store(&db, owner.id).await?;
    let now = Utc::now().fixed_offset();
    let v = vet::ActiveModel {
        id: Set(Uuid::new_v4()),
        first_name: Set("Jane".into()),
        last_name: Set("Doe".into()),
        specialty: Set(None),
        phone: Set(None),
        email: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await?;
    let s = offering::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Checkup".into()),
        description: Set(None),
        price: Set(40.0),
        duration_minutes: Set(Some(30)),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await?;
    vet_store_vet::Entity::insert(vet_store_vet::ActiveModel { vet_store_id: Set(vs.id), vet_id: Set(v.id) })
        .exec_without_returning(&db)
        .await?;
    vet_store_service::Entity::insert(vet_store_service::ActiveModel { vet_store_id: Set(vs.id), service_id: Set(s.id) })
        .exec_without_returning(&db)
        .await?;

    offering::Entity::delete_by_id(s.id).exec(&db).await?;
    assert_eq!(vet_store_service::Entity::find().count(&db).await?, 0);
    assert_eq!(vet_store_vet::Entity::find().count(&db).await?, 1);

    vet_store::Entity::delete_by_id(vs.id).exec(&db).await?;
    assert_eq!(vet_store_vet::Entity::find().count(&db).await?, 0);
    assert_eq!(vet::Entity::find().count(&db).await?, 1);
    Ok(())
}

#[test]
fn store_row_exposes_availability() {
    let now = Utc::now().fixed_offset();
    let row = store::Model {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        name: "Shop".into(),
        description: None,
        store_type: StoreType::PetStore,
        phone: None,
        email: None,
        open_time: Some("09:00".into()),
        close_time: Some("17:30".into()),
        open_days: Some("MON-FRI".into()),
        created_at: now,
        updated_at: now,
    };
    let wire: common::types::store::Store = row.into();
    assert_eq!(wire.availability.open_time.as_deref(), Some("09:00"));
    assert_eq!(wire.availability.close_time.as_deref(), Some("17:30"));
}
