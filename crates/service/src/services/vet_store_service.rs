//! Vet-store profile nested under a store of type VET_STORE, with its vet and
//! service memberships.

use common::types::store::{CreateVetStoreRequest, UpdateVetStoreRequest, VetStore, VetStoreDetails};
use common::types::StoreType;
use models::{offering, vet, vet_store, vet_store_service, vet_store_vet};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, instrument};
use uuid::Uuid;

use super::{now, owned_store};
use crate::errors::{ServiceError, ServiceResult};
use crate::reconcile::{current_members, ensure_all_exist, sync_members};

async fn find_in_store<C: ConnectionTrait>(conn: &C, store_id: Uuid, id: Uuid) -> ServiceResult<vet_store::Model> {
    vet_store::Entity::find_by_id(id)
        .filter(vet_store::Column::StoreId.eq(store_id))
        .one(conn)
        .await?
        .ok_or_else(|| ServiceError::not_found("vet store"))
}

async fn sync_vets<C: ConnectionTrait>(conn: &C, vet_store_id: Uuid, vet_ids: &[Uuid]) -> ServiceResult<()> {
    ensure_all_exist::<vet::Entity, _>(conn, vet::Column::Id, vet_ids, "vet").await?;
    let plan = sync_members::<vet_store_vet::Entity, _, _>(
        conn,
        vet_store_vet::Column::VetStoreId,
        vet_store_vet::Column::VetId,
        vet_store_id,
        vet_ids,
        |vet_id| vet_store_vet::ActiveModel { vet_store_id: Set(vet_store_id), vet_id: Set(vet_id) },
    )
    .await?;
    debug!(connect = plan.connect.len(), disconnect = plan.disconnect.len(), "vet memberships synced");
    Ok(())
}

async fn sync_services<C: ConnectionTrait>(conn: &C, vet_store_id: Uuid, service_ids: &[Uuid]) -> ServiceResult<()> {
    ensure_all_exist::<offering::Entity, _>(conn, offering::Column::Id, service_ids, "service").await?;
    let plan = sync_members::<vet_store_service::Entity, _, _>(
        conn,
        vet_store_service::Column::VetStoreId,
        vet_store_service::Column::ServiceId,
        vet_store_id,
        service_ids,
        |service_id| vet_store_service::ActiveModel { vet_store_id: Set(vet_store_id), service_id: Set(service_id) },
    )
    .await?;
    debug!(connect = plan.connect.len(), disconnect = plan.disconnect.len(), "service memberships synced");
    Ok(())
}

async fn details<C: ConnectionTrait>(conn: &C, row: vet_store::Model) -> ServiceResult<VetStoreDetails> {
    let vet_ids = current_members::<vet_store_vet::Entity, _>(
        conn,
        vet_store_vet::Column::VetStoreId,
        vet_store_vet::Column::VetId,
        row.id,
    )
    .await?;
    let service_ids = current_members::<vet_store_service::Entity, _>(
        conn,
        vet_store_service::Column::VetStoreId,
        vet_store_service::Column::ServiceId,
        row.id,
    )
    .await?;
    let vets = vet::Entity::find()
        .filter(vet::Column::Id.is_in(vet_ids))
        .order_by_asc(vet::Column::LastName)
        .all(conn)
        .await?;
    let services = offering::Entity::find()
        .filter(offering::Column::Id.is_in(service_ids))
        .order_by_asc(offering::Column::Name)
        .all(conn)
        .await?;
    Ok(VetStoreDetails {
        vet_store: row.into(),
        vets: vets.into_iter().map(Into::into).collect(),
        services: services.into_iter().map(Into::into).collect(),
    })
}

#[instrument(skip(db, input))]
pub async fn create(db: &DatabaseConnection, user_id: Uuid, store_id: Uuid, input: CreateVetStoreRequest) -> ServiceResult<VetStoreDetails> {
    let txn = db.begin().await?;
    let store = owned_store(&txn, store_id, user_id, "add a vet store profile").await?;
    if store.store_type != StoreType::VetStore {
        return Err(ServiceError::bad_request("store is not a vet store"));
    }
    let existing = vet_store::Entity::find().filter(vet_store::Column::StoreId.eq(store_id)).one(&txn).await?;
    if existing.is_some() {
        return Err(ServiceError::bad_request("store already has a vet store profile"));
    }
    let ts = now();
    let row = vet_store::ActiveModel {
        id: Set(Uuid::new_v4()),
        store_id: Set(store_id),
        emergency_service: Set(input.emergency_service),
        license_number: Set(input.license_number),
        created_at: Set(ts),
        updated_at: Set(ts),
    }
    .insert(&txn)
    .await?;
    sync_vets(&txn, row.id, &input.vet_ids).await?;
    sync_services(&txn, row.id, &input.service_ids).await?;
    let out = details(&txn, row).await?;
    txn.commit().await?;
    Ok(out)
}

pub async fn get_one(db: &DatabaseConnection, store_id: Uuid, id: Uuid) -> ServiceResult<VetStoreDetails> {
    let row = find_in_store(db, store_id, id).await?;
    details(db, row).await
}

pub async fn get_all(db: &DatabaseConnection, store_id: Uuid) -> ServiceResult<Vec<VetStore>> {
    let rows = vet_store::Entity::find().filter(vet_store::Column::StoreId.eq(store_id)).all(db).await?;
    Ok(rows.into_iter().map(VetStore::from).collect())
}

/// Scalar fields are patched; `vetIds`/`serviceIds`, when given, become the
/// exact membership.
#[instrument(skip(db, changes))]
pub async fn update_one(
    db: &DatabaseConnection,
    user_id: Uuid,
    store_id: Uuid,
    id: Uuid,
    changes: UpdateVetStoreRequest,
) -> ServiceResult<VetStoreDetails> {
    let txn = db.begin().await?;
    let row = find_in_store(&txn, store_id, id).await?;
    owned_store(&txn, store_id, user_id, "update this vet store").await?;
    let mut am: vet_store::ActiveModel = row.into();
    if let Some(v) = changes.emergency_service { am.emergency_service = Set(v); }
    if let Some(v) = changes.license_number { am.license_number = Set(Some(v)); }
    am.updated_at = Set(now());
    let updated = am.update(&txn).await?;
    if let Some(ids) = &changes.vet_ids {
        sync_vets(&txn, id, ids).await?;
    }
    if let Some(ids) = &changes.service_ids {
        sync_services(&txn, id, ids).await?;
    }
    let out = details(&txn, updated).await?;
    txn.commit().await?;
    Ok(out)
}

pub async fn delete_one(db: &DatabaseConnection, user_id: Uuid, store_id: Uuid, id: Uuid) -> ServiceResult<VetStore> {
    let txn = db.begin().await?;
    let row = find_in_store(&txn, store_id, id).await?;
    owned_store(&txn, store_id, user_id, "delete this vet store").await?;
    row.clone().delete(&txn).await?;
    txn.commit().await?;
    Ok(row.into())
}
