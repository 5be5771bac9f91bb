//! Vets. A vet employed by vet stores can only be changed by the owner of
//! every one of those stores; an unattached vet by any authenticated user.

use common::types::vet::{CreateVetRequest, UpdateVetRequest, Vet};
use models::{vet, vet_store, vet_store_vet};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use uuid::Uuid;

use super::{now, owned_store};
use crate::errors::{ServiceError, ServiceResult};
use crate::reconcile::current_members;

async fn check_employers<C: ConnectionTrait>(conn: &C, user_id: Uuid, vet_id: Uuid, action: &str) -> ServiceResult<()> {
    let clinic_ids = current_members::<vet_store_vet::Entity, _>(
        conn,
        vet_store_vet::Column::VetId,
        vet_store_vet::Column::VetStoreId,
        vet_id,
    )
    .await?;
    if clinic_ids.is_empty() {
        return Ok(());
    }
    let clinics = vet_store::Entity::find().filter(vet_store::Column::Id.is_in(clinic_ids)).all(conn).await?;
    for clinic in clinics {
        owned_store(conn, clinic.store_id, user_id, action).await?;
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, input: CreateVetRequest) -> ServiceResult<Vet> {
    let ts = now();
    let row = vet::ActiveModel {
        id: Set(Uuid::new_v4()),
        first_name: Set(input.first_name),
        last_name: Set(input.last_name),
        specialty: Set(input.specialty),
        phone: Set(input.phone),
        email: Set(input.email),
        created_at: Set(ts),
        updated_at: Set(ts),
    }
    .insert(db)
    .await?;
    Ok(row.into())
}

pub async fn get_one(db: &DatabaseConnection, id: Uuid) -> ServiceResult<Vet> {
    vet::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(Vet::from)
        .ok_or_else(|| ServiceError::not_found("vet"))
}

pub async fn get_all(db: &DatabaseConnection) -> ServiceResult<Vec<Vet>> {
    let rows = vet::Entity::find()
        .order_by_asc(vet::Column::LastName)
        .order_by_asc(vet::Column::FirstName)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(Vet::from).collect())
}

pub async fn update_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid, changes: UpdateVetRequest) -> ServiceResult<Vet> {
    let txn = db.begin().await?;
    let row = vet::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("vet"))?;
    check_employers(&txn, user_id, id, "update this vet").await?;
    let mut am: vet::ActiveModel = row.into();
    if let Some(v) = changes.first_name { am.first_name = Set(v); }
    if let Some(v) = changes.last_name { am.last_name = Set(v); }
    if let Some(v) = changes.specialty { am.specialty = Set(Some(v)); }
    if let Some(v) = changes.phone { am.phone = Set(Some(v)); }
    if let Some(v) = changes.email { am.email = Set(Some(v)); }
    am.updated_at = Set(now());
    let updated = am.update(&txn).await?;
    txn.commit().await?;
    Ok(updated.into())
}

/// Memberships in vet stores are dropped with the vet.
pub async fn delete_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid) -> ServiceResult<Vet> {
    let txn = db.begin().await?;
    let row = vet::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("vet"))?;
    check_employers(&txn, user_id, id, "delete this vet").await?;
    row.clone().delete(&txn).await?;
    txn.commit().await?;
    Ok(row.into())
}
