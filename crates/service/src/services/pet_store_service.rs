//! Pet-store profile nested under a store of type PET_STORE.

use common::types::store::{CreatePetStoreRequest, PetStore, UpdatePetStoreRequest};
use common::types::StoreType;
use models::pet_store;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::instrument;
use uuid::Uuid;

use super::{now, owned_store};
use crate::errors::{ServiceError, ServiceResult};

async fn find_in_store<C: ConnectionTrait>(conn: &C, store_id: Uuid, id: Uuid) -> ServiceResult<pet_store::Model> {
    pet_store::Entity::find_by_id(id)
        .filter(pet_store::Column::StoreId.eq(store_id))
        .one(conn)
        .await?
        .ok_or_else(|| ServiceError::not_found("pet store"))
}

#[instrument(skip(db, input))]
pub async fn create(db: &DatabaseConnection, user_id: Uuid, store_id: Uuid, input: CreatePetStoreRequest) -> ServiceResult<PetStore> {
    let txn = db.begin().await?;
    let store = owned_store(&txn, store_id, user_id, "add a pet store profile").await?;
    if store.store_type != StoreType::PetStore {
        return Err(ServiceError::bad_request("store is not a pet store"));
    }
    let existing = pet_store::Entity::find().filter(pet_store::Column::StoreId.eq(store_id)).one(&txn).await?;
    if existing.is_some() {
        return Err(ServiceError::bad_request("store already has a pet store profile"));
    }
    let ts = now();
    let row = pet_store::ActiveModel {
        id: Set(Uuid::new_v4()),
        store_id: Set(store_id),
        has_grooming: Set(input.has_grooming),
        has_boarding: Set(input.has_boarding),
        sells_live_animals: Set(input.sells_live_animals),
        created_at: Set(ts),
        updated_at: Set(ts),
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;
    Ok(row.into())
}

pub async fn get_one(db: &DatabaseConnection, store_id: Uuid, id: Uuid) -> ServiceResult<PetStore> {
    Ok(find_in_store(db, store_id, id).await?.into())
}

pub async fn get_all(db: &DatabaseConnection, store_id: Uuid) -> ServiceResult<Vec<PetStore>> {
    let rows = pet_store::Entity::find().filter(pet_store::Column::StoreId.eq(store_id)).all(db).await?;
    Ok(rows.into_iter().map(PetStore::from).collect())
}

pub async fn update_one(
    db: &DatabaseConnection,
    user_id: Uuid,
    store_id: Uuid,
    id: Uuid,
    changes: UpdatePetStoreRequest,
) -> ServiceResult<PetStore> {
    let txn = db.begin().await?;
    let row = find_in_store(&txn, store_id, id).await?;
    owned_store(&txn, store_id, user_id, "update this pet store").await?;
    let mut am: pet_store::ActiveModel = row.into();
    if let Some(v) = changes.has_grooming { am.has_grooming = Set(v); }
    if let Some(v) = changes.has_boarding { am.has_boarding = Set(v); }
    if let Some(v) = changes.sells_live_animals { am.sells_live_animals = Set(v); }
    am.updated_at = Set(now());
    let updated = am.update(&txn).await?;
    txn.commit().await?;
    Ok(updated.into())
}

pub async fn delete_one(db: &DatabaseConnection, user_id: Uuid, store_id: Uuid, id: Uuid) -> ServiceResult<PetStore> {
    let txn = db.begin().await?;
    let row = find_in_store(&txn, store_id, id).await?;
    owned_store(&txn, store_id, user_id, "delete this pet store").await?;
    row.clone().delete(&txn).await?;
    txn.commit().await?;
    Ok(row.into())
}
