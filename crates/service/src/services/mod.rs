//! Per-entity CRUD over SeaORM. Functions take the connection explicitly and
//! return wire types from `common::types`.

use chrono::Utc;
use models::store;
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use sea_orm::{ConnectionTrait, EntityTrait};
use uuid::Uuid;

use crate::errors::{ServiceError, ServiceResult};

pub mod appointment_service;
pub mod location_service;
pub mod offering_service;
pub mod pet_service;
pub mod pet_store_service;
pub mod product_service;
pub mod review_service;
pub mod service_provider_service;
pub mod store_service;
pub mod vet_service;
pub mod vet_store_service;

pub(crate) fn now() -> DateTimeWithTimeZone { Utc::now().fixed_offset() }

/// Load a store and require `user_id` to own it.
pub(crate) async fn owned_store<C: ConnectionTrait>(conn: &C, store_id: Uuid, user_id: Uuid, action: &str) -> ServiceResult<store::Model> {
    let row = store::Entity::find_by_id(store_id)
        .one(conn)
        .await?
        .ok_or_else(|| ServiceError::not_found("store"))?;
    if row.user_id != user_id {
        return Err(ServiceError::forbidden(action));
    }
    Ok(row)
}

pub(crate) fn ensure_owner(owner_id: Uuid, user_id: Uuid, action: &str) -> ServiceResult<()> {
    if owner_id != user_id {
        return Err(ServiceError::forbidden(action));
    }
    Ok(())
}
