//! Reviews of products, service providers and stores. Writes touching a
//! product recompute its `average_rating` in the same transaction.

use common::types::review::{CreateReviewRequest, Review, ReviewListQuery, UpdateReviewRequest};
use models::{product, review, service_provider, store};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::{debug, instrument};
use uuid::Uuid;

use super::{ensure_owner, now};
use crate::errors::{ServiceError, ServiceResult};
use crate::reconcile::ensure_all_exist;

/// Mean rating of a product's reviews; 0 when it has none.
pub async fn refresh_product_rating<C: ConnectionTrait>(conn: &C, product_id: Uuid) -> ServiceResult<f64> {
    let ratings: Vec<i32> = review::Entity::find()
        .select_only()
        .column(review::Column::Rating)
        .filter(review::Column::ProductId.eq(product_id))
        .into_tuple()
        .all(conn)
        .await?;
    let average = if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64
    };
    product::Entity::update_many()
        .col_expr(product::Column::AverageRating, Expr::value(average))
        .filter(product::Column::Id.eq(product_id))
        .exec(conn)
        .await?;
    debug!(%product_id, average, reviews = ratings.len(), "product rating refreshed");
    Ok(average)
}

async fn find<C: ConnectionTrait>(conn: &C, id: Uuid) -> ServiceResult<review::Model> {
    review::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| ServiceError::not_found("review"))
}

#[instrument(skip(db, input))]
pub async fn create(db: &DatabaseConnection, user_id: Uuid, input: CreateReviewRequest) -> ServiceResult<Review> {
    if input.product_id.is_none() && input.service_provider_id.is_none() && input.store_id.is_none() {
        return Err(ServiceError::bad_request("review needs a productId, serviceProviderId or storeId"));
    }
    let txn = db.begin().await?;
    if let Some(id) = input.product_id {
        ensure_all_exist::<product::Entity, _>(&txn, product::Column::Id, &[id], "product").await?;
    }
    if let Some(id) = input.service_provider_id {
        ensure_all_exist::<service_provider::Entity, _>(&txn, service_provider::Column::Id, &[id], "service provider").await?;
    }
    if let Some(id) = input.store_id {
        ensure_all_exist::<store::Entity, _>(&txn, store::Column::Id, &[id], "store").await?;
    }
    let ts = now();
    let row = review::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        product_id: Set(input.product_id),
        service_provider_id: Set(input.service_provider_id),
        store_id: Set(input.store_id),
        rating: Set(input.rating),
        content: Set(input.content),
        created_at: Set(ts),
        updated_at: Set(ts),
    }
    .insert(&txn)
    .await?;
    if let Some(product_id) = row.product_id {
        refresh_product_rating(&txn, product_id).await?;
    }
    txn.commit().await?;
    Ok(row.into())
}

pub async fn get_one(db: &DatabaseConnection, id: Uuid) -> ServiceResult<Review> { Ok(find(db, id).await?.into()) }

pub async fn get_all(db: &DatabaseConnection, query: ReviewListQuery) -> ServiceResult<Vec<Review>> {
    let mut select = review::Entity::find().order_by_desc(review::Column::CreatedAt);
    if let Some(id) = query.product_id {
        select = select.filter(review::Column::ProductId.eq(id));
    }
    if let Some(id) = query.store_id {
        select = select.filter(review::Column::StoreId.eq(id));
    }
    if let Some(id) = query.service_provider_id {
        select = select.filter(review::Column::ServiceProviderId.eq(id));
    }
    let rows = select.all(db).await?;
    Ok(rows.into_iter().map(Review::from).collect())
}

#[instrument(skip(db, changes))]
pub async fn update_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid, changes: UpdateReviewRequest) -> ServiceResult<Review> {
    let txn = db.begin().await?;
    let row = find(&txn, id).await?;
    ensure_owner(row.user_id, user_id, "update this review")?;
    let mut am: review::ActiveModel = row.into();
    if let Some(v) = changes.rating { am.rating = Set(v); }
    if let Some(v) = changes.content { am.content = Set(v); }
    am.updated_at = Set(now());
    let updated = am.update(&txn).await?;
    if let Some(product_id) = updated.product_id {
        refresh_product_rating(&txn, product_id).await?;
    }
    txn.commit().await?;
    Ok(updated.into())
}

#[instrument(skip(db))]
pub async fn delete_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid) -> ServiceResult<Review> {
    let txn = db.begin().await?;
    let row = find(&txn, id).await?;
    ensure_owner(row.user_id, user_id, "delete this review")?;
    row.clone().delete(&txn).await?;
    if let Some(product_id) = row.product_id {
        refresh_product_rating(&txn, product_id).await?;
    }
    txn.commit().await?;
    Ok(row.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, make_product, make_store, make_user};
    use common::types::{ProductCategory, StoreType};

    fn review_of(product_id: Uuid, rating: i32) -> CreateReviewRequest {
        CreateReviewRequest {
            rating,
            content: "Great".into(),
            product_id: Some(product_id),
            service_provider_id: None,
            store_id: None,
        }
    }

    async fn rating_of(db: &DatabaseConnection, id: Uuid) -> anyhow::Result<f64> {
        Ok(product::Entity::find_by_id(id).one(db).await?.map(|p| p.average_rating).unwrap_or(-1.0))
    }

    #[tokio::test]
    async fn writes_recompute_average_rating() -> anyhow::Result<()> {
        let db = get_db().await?;
        let owner = make_user(&db, "owner").await?;
        let buyer = make_user(&db, "buyer").await?;
        let store = make_store(&db, owner.id, StoreType::PetStore).await?;
        let p = make_product(&db, store.id, "Kibble", ProductCategory::Food).await?;

        let r1 = create(&db, buyer.id, review_of(p.id, 5)).await?;
        create(&db, owner.id, review_of(p.id, 2)).await?;
        assert_eq!(rating_of(&db, p.id).await?, 3.5);

        update_one(&db, buyer.id, r1.id, UpdateReviewRequest { rating: Some(4), content: None }).await?;
        assert_eq!(rating_of(&db, p.id).await?, 3.0);

        assert!(matches!(delete_one(&db, owner.id, r1.id).await, Err(ServiceError::Forbidden(_))));
        delete_one(&db, buyer.id, r1.id).await?;
        assert_eq!(rating_of(&db, p.id).await?, 2.0);
        Ok(())
    }

    #[tokio::test]
    async fn review_needs_existing_target() -> anyhow::Result<()> {
        let db = get_db().await?;
        let buyer = make_user(&db, "buyer").await?;
        let untargeted = CreateReviewRequest { rating: 3, content: "ok".into(), product_id: None, service_provider_id: None, store_id: None };
        assert!(matches!(create(&db, buyer.id, untargeted).await, Err(ServiceError::BadRequest(_))));
        assert!(matches!(create(&db, buyer.id, review_of(Uuid::new_v4(), 3)).await, Err(ServiceError::BadRequest(_))));
        Ok(())
    }

    #[tokio::test]
    async fn listing_filters_by_target() -> anyhow::Result<()> {
        let db = get_db().await?;
        let owner = make_user(&db, "owner").await?;
        let store = make_store(&db, owner.id, StoreType::PetStore).await?;
        let a = make_product(&db, store.id, "A", ProductCategory::Food).await?;
        let b = make_product(&db, store.id, "B", ProductCategory::Toy).await?;
        create(&db, owner.id, review_of(a.id, 4)).await?;
        create(&db, owner.id, review_of(b.id, 1)).await?;

        let only_a = get_all(&db, ReviewListQuery { product_id: Some(a.id), ..Default::default() }).await?;
        assert_eq!(only_a.len(), 1);
        assert_eq!(only_a[0].rating, 4);
        assert_eq!(get_all(&db, ReviewListQuery::default()).await?.len(), 2);
        Ok(())
    }
}
