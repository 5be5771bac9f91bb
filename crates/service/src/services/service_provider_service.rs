use common::types::offering::{
    CreateServiceProviderRequest, ServiceProvider, ServiceProviderDetails, UpdateServiceProviderRequest,
};
use models::{offering, service_provider, service_provider_service, user};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{ensure_owner, now};
use crate::errors::{ServiceError, ServiceResult};
use crate::reconcile::{current_members, ensure_all_exist, sync_members};

async fn sync_services<C: ConnectionTrait>(conn: &C, provider_id: Uuid, service_ids: &[Uuid]) -> ServiceResult<()> {
    ensure_all_exist::<offering::Entity, _>(conn, offering::Column::Id, service_ids, "service").await?;
    sync_members::<service_provider_service::Entity, _, _>(
        conn,
        service_provider_service::Column::ServiceProviderId,
        service_provider_service::Column::ServiceId,
        provider_id,
        service_ids,
        |service_id| service_provider_service::ActiveModel {
            service_provider_id: Set(provider_id),
            service_id: Set(service_id),
        },
    )
    .await?;
    Ok(())
}

async fn details<C: ConnectionTrait>(conn: &C, row: service_provider::Model) -> ServiceResult<ServiceProviderDetails> {
    let ids = current_members::<service_provider_service::Entity, _>(
        conn,
        service_provider_service::Column::ServiceProviderId,
        service_provider_service::Column::ServiceId,
        row.id,
    )
    .await?;
    let services = offering::Entity::find()
        .filter(offering::Column::Id.is_in(ids))
        .order_by_asc(offering::Column::Name)
        .all(conn)
        .await?;
    Ok(ServiceProviderDetails { provider: row.into(), services: services.into_iter().map(Into::into).collect() })
}

async fn find<C: ConnectionTrait>(conn: &C, id: Uuid) -> ServiceResult<service_provider::Model> {
    service_provider::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| ServiceError::not_found("service provider"))
}

#[instrument(skip(db, input))]
pub async fn create(db: &DatabaseConnection, user_id: Uuid, input: CreateServiceProviderRequest) -> ServiceResult<ServiceProviderDetails> {
    let txn = db.begin().await?;
    if user::Entity::find_by_id(user_id).one(&txn).await?.is_none() {
        return Err(ServiceError::not_found("user"));
    }
    let existing = service_provider::Entity::find()
        .filter(service_provider::Column::UserId.eq(user_id))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(ServiceError::bad_request("user already has a service provider profile"));
    }
    let ts = now();
    let row = service_provider::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        name: Set(input.name),
        description: Set(input.description),
        phone: Set(input.phone),
        created_at: Set(ts),
        updated_at: Set(ts),
    }
    .insert(&txn)
    .await?;
    sync_services(&txn, row.id, &input.service_ids).await?;
    let out = details(&txn, row).await?;
    txn.commit().await?;
    info!(provider_id = %out.provider.id, "service_provider_created");
    Ok(out)
}

pub async fn get_one(db: &DatabaseConnection, id: Uuid) -> ServiceResult<ServiceProviderDetails> {
    let row = find(db, id).await?;
    details(db, row).await
}

pub async fn get_all(db: &DatabaseConnection) -> ServiceResult<Vec<ServiceProvider>> {
    let rows = service_provider::Entity::find()
        .order_by_asc(service_provider::Column::Name)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(ServiceProvider::from).collect())
}

#[instrument(skip(db, changes))]
pub async fn update_one(
    db: &DatabaseConnection,
    user_id: Uuid,
    id: Uuid,
    changes: UpdateServiceProviderRequest,
) -> ServiceResult<ServiceProviderDetails> {
    let txn = db.begin().await?;
    let row = find(&txn, id).await?;
    ensure_owner(row.user_id, user_id, "update this service provider")?;
    let mut am: service_provider::ActiveModel = row.into();
    if let Some(v) = changes.name { am.name = Set(v); }
    if let Some(v) = changes.description { am.description = Set(Some(v)); }
    if let Some(v) = changes.phone { am.phone = Set(Some(v)); }
    am.updated_at = Set(now());
    let updated = am.update(&txn).await?;
    if let Some(ids) = &changes.service_ids {
        sync_services(&txn, id, ids).await?;
    }
    let out = details(&txn, updated).await?;
    txn.commit().await?;
    Ok(out)
}

pub async fn delete_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid) -> ServiceResult<ServiceProvider> {
    let txn = db.begin().await?;
    let row = find(&txn, id).await?;
    ensure_owner(row.user_id, user_id, "delete this service provider")?;
    row.clone().delete(&txn).await?;
    txn.commit().await?;
    Ok(row.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, make_offering, make_user};

    fn walker(service_ids: Vec<Uuid>) -> CreateServiceProviderRequest {
        CreateServiceProviderRequest { name: "Dog Walkers".into(), description: None, phone: None, service_ids }
    }

    #[tokio::test]
    async fn provider_lifecycle_with_services() -> anyhow::Result<()> {
        let db = get_db().await?;
        let owner = make_user(&db, "owner").await?;
        let other = make_user(&db, "other").await?;
        let walk = make_offering(&db, "Walk").await?;
        let bath = make_offering(&db, "Bath").await?;

        let created = create(&db, owner.id, walker(vec![walk.id])).await?;
        assert_eq!(created.services.len(), 1);
        assert!(matches!(create(&db, owner.id, walker(vec![])).await, Err(ServiceError::BadRequest(_))));

        let changes = UpdateServiceProviderRequest { service_ids: Some(vec![bath.id, walk.id]), ..Default::default() };
        assert!(matches!(
            update_one(&db, other.id, created.provider.id, changes.clone()).await,
            Err(ServiceError::Forbidden(_))
        ));
        let updated = update_one(&db, owner.id, created.provider.id, changes).await?;
        let names: Vec<_> = updated.services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Bath", "Walk"]);

        delete_one(&db, owner.id, created.provider.id).await?;
        assert!(get_all(&db).await?.is_empty());
        assert_eq!(service_provider_service::Entity::find().all(&db).await?.len(), 0);
        Ok(())
    }
}
