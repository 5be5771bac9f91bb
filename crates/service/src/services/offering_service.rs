//! Services offered by providers and vet stores (`/api/services`).
//!
//! A service has no owner column of its own; it belongs to whoever owns the
//! providers and vet stores it is linked to. Linking or unlinking a member
//! requires owning that member. Editing or deleting the service itself
//! requires owning every current link; an unlinked service is open to any
//! authenticated user.

use common::types::offering::{CreateOfferingRequest, Offering, OfferingDetails, UpdateOfferingRequest};
use models::{offering, service_provider, service_provider_service, vet_store, vet_store_service};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use tracing::instrument;
use uuid::Uuid;

use super::{ensure_owner, now, owned_store};
use crate::errors::{ServiceError, ServiceResult};
use crate::reconcile::{current_members, ensure_all_exist, reconcile, sync_members};

async fn check_providers<C: ConnectionTrait>(conn: &C, user_id: Uuid, ids: &[Uuid], action: &str) -> ServiceResult<()> {
    if ids.is_empty() {
        return Ok(());
    }
    let rows = service_provider::Entity::find()
        .filter(service_provider::Column::Id.is_in(ids.to_vec()))
        .all(conn)
        .await?;
    for row in rows {
        ensure_owner(row.user_id, user_id, action)?;
    }
    Ok(())
}

async fn check_vet_stores<C: ConnectionTrait>(conn: &C, user_id: Uuid, ids: &[Uuid], action: &str) -> ServiceResult<()> {
    if ids.is_empty() {
        return Ok(());
    }
    let rows = vet_store::Entity::find().filter(vet_store::Column::Id.is_in(ids.to_vec())).all(conn).await?;
    for row in rows {
        owned_store(conn, row.store_id, user_id, action).await?;
    }
    Ok(())
}

async fn linked_providers<C: ConnectionTrait>(conn: &C, service_id: Uuid) -> ServiceResult<Vec<Uuid>> {
    current_members::<service_provider_service::Entity, _>(
        conn,
        service_provider_service::Column::ServiceId,
        service_provider_service::Column::ServiceProviderId,
        service_id,
    )
    .await
}

async fn linked_vet_stores<C: ConnectionTrait>(conn: &C, service_id: Uuid) -> ServiceResult<Vec<Uuid>> {
    current_members::<vet_store_service::Entity, _>(
        conn,
        vet_store_service::Column::ServiceId,
        vet_store_service::Column::VetStoreId,
        service_id,
    )
    .await
}

/// The caller must own every provider and vet store linked to the service.
async fn check_all_links<C: ConnectionTrait>(conn: &C, user_id: Uuid, service_id: Uuid, action: &str) -> ServiceResult<()> {
    check_providers(conn, user_id, &linked_providers(conn, service_id).await?, action).await?;
    check_vet_stores(conn, user_id, &linked_vet_stores(conn, service_id).await?, action).await
}

async fn sync_providers<C: ConnectionTrait>(conn: &C, user_id: Uuid, service_id: Uuid, provider_ids: &[Uuid]) -> ServiceResult<()> {
    ensure_all_exist::<service_provider::Entity, _>(conn, service_provider::Column::Id, provider_ids, "service provider").await?;
    let plan = reconcile(&linked_providers(conn, service_id).await?, provider_ids);
    if plan.is_noop() {
        return Ok(());
    }
    let changed: Vec<Uuid> = plan.connect.iter().chain(&plan.disconnect).copied().collect();
    check_providers(conn, user_id, &changed, "change another provider's services").await?;
    sync_members::<service_provider_service::Entity, _, _>(
        conn,
        service_provider_service::Column::ServiceId,
        service_provider_service::Column::ServiceProviderId,
        service_id,
        provider_ids,
        |provider_id| service_provider_service::ActiveModel {
            service_provider_id: Set(provider_id),
            service_id: Set(service_id),
        },
    )
    .await?;
    Ok(())
}

async fn sync_vet_stores<C: ConnectionTrait>(conn: &C, user_id: Uuid, service_id: Uuid, vet_store_ids: &[Uuid]) -> ServiceResult<()> {
    ensure_all_exist::<vet_store::Entity, _>(conn, vet_store::Column::Id, vet_store_ids, "vet store").await?;
    let plan = reconcile(&linked_vet_stores(conn, service_id).await?, vet_store_ids);
    if plan.is_noop() {
        return Ok(());
    }
    let changed: Vec<Uuid> = plan.connect.iter().chain(&plan.disconnect).copied().collect();
    check_vet_stores(conn, user_id, &changed, "change another clinic's services").await?;
    sync_members::<vet_store_service::Entity, _, _>(
        conn,
        vet_store_service::Column::ServiceId,
        vet_store_service::Column::VetStoreId,
        service_id,
        vet_store_ids,
        |vet_store_id| vet_store_service::ActiveModel { vet_store_id: Set(vet_store_id), service_id: Set(service_id) },
    )
    .await?;
    Ok(())
}

async fn details<C: ConnectionTrait>(conn: &C, row: offering::Model) -> ServiceResult<OfferingDetails> {
    let service_provider_ids = linked_providers(conn, row.id).await?;
    let vet_store_ids = linked_vet_stores(conn, row.id).await?;
    Ok(OfferingDetails { offering: row.into(), service_provider_ids, vet_store_ids })
}

async fn find<C: ConnectionTrait>(conn: &C, id: Uuid) -> ServiceResult<offering::Model> {
    offering::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| ServiceError::not_found("service"))
}

#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create(db: &DatabaseConnection, user_id: Uuid, input: CreateOfferingRequest) -> ServiceResult<OfferingDetails> {
    let txn = db.begin().await?;
    let ts = now();
    let row = offering::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        description: Set(input.description),
        price: Set(input.price),
        duration_minutes: Set(input.duration_minutes),
        created_at: Set(ts),
        updated_at: Set(ts),
    }
    .insert(&txn)
    .await?;
    sync_providers(&txn, user_id, row.id, &input.service_provider_ids).await?;
    sync_vet_stores(&txn, user_id, row.id, &input.vet_store_ids).await?;
    let out = details(&txn, row).await?;
    txn.commit().await?;
    Ok(out)
}

pub async fn get_one(db: &DatabaseConnection, id: Uuid) -> ServiceResult<OfferingDetails> {
    let row = find(db, id).await?;
    details(db, row).await
}

pub async fn get_all(db: &DatabaseConnection) -> ServiceResult<Vec<Offering>> {
    let rows = offering::Entity::find().order_by_asc(offering::Column::Name).all(db).await?;
    Ok(rows.into_iter().map(Offering::from).collect())
}

#[instrument(skip(db, changes))]
pub async fn update_one(
    db: &DatabaseConnection,
    user_id: Uuid,
    id: Uuid,
    changes: UpdateOfferingRequest,
) -> ServiceResult<OfferingDetails> {
    let txn = db.begin().await?;
    let row = find(&txn, id).await?;
    let edits_fields =
        changes.name.is_some() || changes.description.is_some() || changes.price.is_some() || changes.duration_minutes.is_some();
    if edits_fields {
        check_all_links(&txn, user_id, id, "update this service").await?;
    }
    let mut am: offering::ActiveModel = row.into();
    if let Some(v) = changes.name { am.name = Set(v); }
    if let Some(v) = changes.description { am.description = Set(Some(v)); }
    if let Some(v) = changes.price { am.price = Set(v); }
    if let Some(v) = changes.duration_minutes { am.duration_minutes = Set(Some(v)); }
    am.updated_at = Set(now());
    let updated = am.update(&txn).await?;
    if let Some(ids) = &changes.service_provider_ids {
        sync_providers(&txn, user_id, id, ids).await?;
    }
    if let Some(ids) = &changes.vet_store_ids {
        sync_vet_stores(&txn, user_id, id, ids).await?;
    }
    let out = details(&txn, updated).await?;
    txn.commit().await?;
    Ok(out)
}

#[instrument(skip(db))]
pub async fn delete_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid) -> ServiceResult<Offering> {
    let txn = db.begin().await?;
    let row = find(&txn, id).await?;
    check_all_links(&txn, user_id, id, "delete this service").await?;
    row.clone().delete(&txn).await?;
    txn.commit().await?;
    Ok(row.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, make_service_provider, make_store, make_user, make_vet_store};
    use common::types::StoreType;

    fn grooming(vet_store_ids: Vec<Uuid>) -> CreateOfferingRequest {
        CreateOfferingRequest {
            name: "Grooming".into(),
            description: None,
            price: 35.0,
            duration_minutes: Some(60),
            service_provider_ids: vec![],
            vet_store_ids,
        }
    }

    #[tokio::test]
    async fn owner_moves_service_between_own_profiles() -> anyhow::Result<()> {
        let db = get_db().await?;
        let owner = make_user(&db, "owner").await?;
        let clinic = make_vet_store(&db, make_store(&db, owner.id, StoreType::VetStore).await?.id).await?;
        let provider = make_service_provider(&db, owner.id, "Owner Grooming").await?;

        let created = create(&db, owner.id, grooming(vec![clinic.id])).await?;
        assert_eq!(created.vet_store_ids, vec![clinic.id]);

        let changes = UpdateOfferingRequest {
            vet_store_ids: Some(vec![]),
            service_provider_ids: Some(vec![provider.id]),
            price: Some(40.0),
            ..Default::default()
        };
        let updated = update_one(&db, owner.id, created.offering.id, changes).await?;
        assert!(updated.vet_store_ids.is_empty());
        assert_eq!(updated.service_provider_ids, vec![provider.id]);
        assert_eq!(updated.offering.price, 40.0);
        assert_eq!(get_one(&db, created.offering.id).await?.service_provider_ids, vec![provider.id]);
        Ok(())
    }

    #[tokio::test]
    async fn stranger_cannot_touch_a_clinic_service() -> anyhow::Result<()> {
        let db = get_db().await?;
        let owner = make_user(&db, "owner").await?;
        let stranger = make_user(&db, "stranger").await?;
        let clinic = make_vet_store(&db, make_store(&db, owner.id, StoreType::VetStore).await?.id).await?;
        let created = create(&db, owner.id, grooming(vec![clinic.id])).await?;
        let id = created.offering.id;

        let detach = UpdateOfferingRequest { vet_store_ids: Some(vec![]), ..Default::default() };
        assert!(matches!(update_one(&db, stranger.id, id, detach).await, Err(ServiceError::Forbidden(_))));
        let rename = UpdateOfferingRequest { name: Some("Hijacked".into()), ..Default::default() };
        assert!(matches!(update_one(&db, stranger.id, id, rename).await, Err(ServiceError::Forbidden(_))));
        assert!(matches!(delete_one(&db, stranger.id, id).await, Err(ServiceError::Forbidden(_))));

        let after = get_one(&db, id).await?;
        assert_eq!(after.vet_store_ids, vec![clinic.id]);
        assert_eq!(after.offering.name, "Grooming");
        assert_eq!(vet_store_service::Entity::find().all(&db).await?.len(), 1);

        delete_one(&db, owner.id, id).await?;
        assert!(get_all(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn cannot_link_someone_elses_profiles() -> anyhow::Result<()> {
        let db = get_db().await?;
        let owner = make_user(&db, "owner").await?;
        let stranger = make_user(&db, "stranger").await?;
        let clinic = make_vet_store(&db, make_store(&db, owner.id, StoreType::VetStore).await?.id).await?;
        let provider = make_service_provider(&db, owner.id, "Owner Grooming").await?;

        assert!(matches!(create(&db, stranger.id, grooming(vec![clinic.id])).await, Err(ServiceError::Forbidden(_))));
        let mut req = grooming(vec![]);
        req.service_provider_ids = vec![provider.id];
        assert!(matches!(create(&db, stranger.id, req).await, Err(ServiceError::Forbidden(_))));
        assert!(get_all(&db).await?.is_empty());

        let loose = create(&db, stranger.id, grooming(vec![])).await?;
        let attach = UpdateOfferingRequest { vet_store_ids: Some(vec![clinic.id]), ..Default::default() };
        assert!(matches!(
            update_one(&db, stranger.id, loose.offering.id, attach).await,
            Err(ServiceError::Forbidden(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn unlinked_service_is_open_to_any_user() -> anyhow::Result<()> {
        let db = get_db().await?;
        let a = make_user(&db, "a").await?;
        let b = make_user(&db, "b").await?;
        let created = create(&db, a.id, grooming(vec![])).await?;
        let rename = UpdateOfferingRequest { name: Some("Nail trim".into()), ..Default::default() };
        assert_eq!(update_one(&db, b.id, created.offering.id, rename).await?.offering.name, "Nail trim");
        delete_one(&db, b.id, created.offering.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn unknown_provider_is_bad_request() -> anyhow::Result<()> {
        let db = get_db().await?;
        let user = make_user(&db, "user").await?;
        let mut req = grooming(vec![]);
        req.service_provider_ids = vec![Uuid::new_v4()];
        assert!(matches!(create(&db, user.id, req).await, Err(ServiceError::BadRequest(_))));
        assert!(get_all(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() -> anyhow::Result<()> {
        let db = get_db().await?;
        let user = make_user(&db, "user").await?;
        assert!(matches!(delete_one(&db, user.id, Uuid::new_v4()).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
