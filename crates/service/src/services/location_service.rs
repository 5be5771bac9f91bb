//! Coordinates attached to a user or a store (at most one each).

use common::types::location::{CreateLocationRequest, Location, LocationListQuery, UpdateLocationRequest};
use models::{location, store, user};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::instrument;
use uuid::Uuid;

use super::{ensure_owner, now, owned_store};
use crate::errors::{ServiceError, ServiceResult};

async fn find<C: ConnectionTrait>(conn: &C, id: Uuid) -> ServiceResult<location::Model> {
    location::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| ServiceError::not_found("location"))
}

/// The caller must be the located user or own the located store.
async fn check_access<C: ConnectionTrait>(conn: &C, row: &location::Model, user_id: Uuid, action: &str) -> ServiceResult<()> {
    if let Some(owner) = row.user_id {
        return ensure_owner(owner, user_id, action);
    }
    if let Some(store_id) = row.store_id {
        owned_store(conn, store_id, user_id, action).await?;
    }
    Ok(())
}

#[instrument(skip(db, input))]
pub async fn create(db: &DatabaseConnection, user_id: Uuid, input: CreateLocationRequest) -> ServiceResult<Location> {
    if input.user_id.is_some() == input.store_id.is_some() {
        return Err(ServiceError::bad_request("location needs exactly one of userId or storeId"));
    }
    let txn = db.begin().await?;
    if let Some(target) = input.user_id {
        if user::Entity::find_by_id(target).one(&txn).await?.is_none() {
            return Err(ServiceError::bad_request("user does not exist"));
        }
        ensure_owner(target, user_id, "set another user's location")?;
        let taken = location::Entity::find().filter(location::Column::UserId.eq(target)).one(&txn).await?;
        if taken.is_some() {
            return Err(ServiceError::bad_request("user already has a location"));
        }
    }
    if let Some(store_id) = input.store_id {
        if store::Entity::find_by_id(store_id).one(&txn).await?.is_none() {
            return Err(ServiceError::bad_request("store does not exist"));
        }
        owned_store(&txn, store_id, user_id, "set this store's location").await?;
        let taken = location::Entity::find().filter(location::Column::StoreId.eq(store_id)).one(&txn).await?;
        if taken.is_some() {
            return Err(ServiceError::bad_request("store already has a location"));
        }
    }
    let ts = now();
    let row = location::ActiveModel {
        id: Set(Uuid::new_v4()),
        latitude: Set(input.latitude),
        longitude: Set(input.longitude),
        user_id: Set(input.user_id),
        store_id: Set(input.store_id),
        created_at: Set(ts),
        updated_at: Set(ts),
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;
    Ok(row.into())
}

pub async fn get_one(db: &DatabaseConnection, id: Uuid) -> ServiceResult<Location> { Ok(find(db, id).await?.into()) }

pub async fn get_all(db: &DatabaseConnection, query: LocationListQuery) -> ServiceResult<Vec<Location>> {
    let mut select = location::Entity::find().order_by_asc(location::Column::CreatedAt);
    if let Some(id) = query.user_id {
        select = select.filter(location::Column::UserId.eq(id));
    }
    if let Some(id) = query.store_id {
        select = select.filter(location::Column::StoreId.eq(id));
    }
    let rows = select.all(db).await?;
    Ok(rows.into_iter().map(Location::from).collect())
}

pub async fn update_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid, changes: UpdateLocationRequest) -> ServiceResult<Location> {
    let txn = db.begin().await?;
    let row = find(&txn, id).await?;
    check_access(&txn, &row, user_id, "update this location").await?;
    let mut am: location::ActiveModel = row.into();
    if let Some(v) = changes.latitude { am.latitude = Set(v); }
    if let Some(v) = changes.longitude { am.longitude = Set(v); }
    am.updated_at = Set(now());
    let updated = am.update(&txn).await?;
    txn.commit().await?;
    Ok(updated.into())
}

pub async fn delete_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid) -> ServiceResult<Location> {
    let txn = db.begin().await?;
    let row = find(&txn, id).await?;
    check_access(&txn, &row, user_id, "delete this location").await?;
    row.clone().delete(&txn).await?;
    txn.commit().await?;
    Ok(row.into())
}
