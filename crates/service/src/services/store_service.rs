use common::types::store::{CreateStoreRequest, Store, StoreDetails, StoreListQuery, UpdateStoreRequest};
use common::types::Page;
use models::{location, pet_store, product, store, user, vet_store};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{now, owned_store};
use crate::errors::{ServiceError, ServiceResult};
use crate::pagination::Pagination;

#[instrument(skip(db, input), fields(store_type = ?input.store_type))]
pub async fn create(db: &DatabaseConnection, user_id: Uuid, input: CreateStoreRequest) -> ServiceResult<Store> {
    let txn = db.begin().await?;
    if user::Entity::find_by_id(user_id).one(&txn).await?.is_none() {
        return Err(ServiceError::not_found("user"));
    }
    let existing = store::Entity::find().filter(store::Column::UserId.eq(user_id)).one(&txn).await?;
    if existing.is_some() {
        return Err(ServiceError::bad_request("user already owns a store"));
    }
    let availability = input.availability.unwrap_or_default();
    let ts = now();
    let row = store::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        name: Set(input.name),
        description: Set(input.description),
        store_type: Set(input.store_type),
        phone: Set(input.phone),
        email: Set(input.email),
        open_time: Set(availability.open_time),
        close_time: Set(availability.close_time),
        open_days: Set(availability.open_days),
        created_at: Set(ts),
        updated_at: Set(ts),
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;
    info!(store_id = %row.id, "store_created");
    Ok(row.into())
}

/// Store with its sub-profile, location and products.
pub async fn get_one(db: &DatabaseConnection, id: Uuid) -> ServiceResult<StoreDetails> {
    let row = store::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("store"))?;
    let pet_store = pet_store::Entity::find().filter(pet_store::Column::StoreId.eq(id)).one(db).await?;
    let vet_store = vet_store::Entity::find().filter(vet_store::Column::StoreId.eq(id)).one(db).await?;
    let location = location::Entity::find().filter(location::Column::StoreId.eq(id)).one(db).await?;
    let products = product::Entity::find()
        .filter(product::Column::StoreId.eq(id))
        .order_by_asc(product::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(StoreDetails {
        store: row.into(),
        pet_store: pet_store.map(Into::into),
        vet_store: vet_store.map(Into::into),
        location: location.map(Into::into),
        products: products.into_iter().map(Into::into).collect(),
    })
}

pub async fn get_all(db: &DatabaseConnection, query: StoreListQuery) -> ServiceResult<Page<Store>> {
    let mut select = store::Entity::find().order_by_asc(store::Column::CreatedAt).order_by_asc(store::Column::Id);
    if let Some(kind) = query.store_type {
        select = select.filter(store::Column::StoreType.eq(kind));
    }
    let page = Pagination::from_query(query.page).fetch(select, db).await?;
    Ok(page.map(Store::from))
}

#[instrument(skip(db, changes))]
pub async fn update_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid, changes: UpdateStoreRequest) -> ServiceResult<Store> {
    let txn = db.begin().await?;
    let row = owned_store(&txn, id, user_id, "update this store").await?;
    let mut am: store::ActiveModel = row.into();
    if let Some(v) = changes.name { am.name = Set(v); }
    if let Some(v) = changes.description { am.description = Set(Some(v)); }
    if let Some(v) = changes.phone { am.phone = Set(Some(v)); }
    if let Some(v) = changes.email { am.email = Set(Some(v)); }
    if let Some(a) = changes.availability {
        if let Some(v) = a.open_time { am.open_time = Set(Some(v)); }
        if let Some(v) = a.close_time { am.close_time = Set(Some(v)); }
        if let Some(v) = a.open_days { am.open_days = Set(Some(v)); }
    }
    am.updated_at = Set(now());
    let updated = am.update(&txn).await?;
    txn.commit().await?;
    Ok(updated.into())
}

/// Removes the store; sub-profiles, products and its location go with it.
#[instrument(skip(db))]
pub async fn delete_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid) -> ServiceResult<Store> {
    let txn = db.begin().await?;
    let row = owned_store(&txn, id, user_id, "delete this store").await?;
    row.clone().delete(&txn).await?;
    txn.commit().await?;
    info!(store_id = %id, "store_deleted");
    Ok(row.into())
}
