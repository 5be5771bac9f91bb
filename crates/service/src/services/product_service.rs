use common::types::product::{CreateProductRequest, Product, ProductDetails, ProductListQuery, UpdateProductRequest};
use common::types::Page;
use models::{product, review};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::instrument;
use uuid::Uuid;

use super::{now, owned_store};
use crate::errors::{ServiceError, ServiceResult};
use crate::pagination::Pagination;

async fn find<C: ConnectionTrait>(conn: &C, id: Uuid) -> ServiceResult<product::Model> {
    product::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| ServiceError::not_found("product"))
}

#[instrument(skip(db, input), fields(store_id = %input.store_id))]
pub async fn create(db: &DatabaseConnection, user_id: Uuid, input: CreateProductRequest) -> ServiceResult<Product> {
    let txn = db.begin().await?;
    owned_store(&txn, input.store_id, user_id, "add products to this store").await?;
    let ts = now();
    let row = product::ActiveModel {
        id: Set(Uuid::new_v4()),
        store_id: Set(input.store_id),
        name: Set(input.name),
        description: Set(input.description),
        price: Set(input.price),
        category: Set(input.category),
        stock: Set(input.stock),
        image_url: Set(input.image_url),
        average_rating: Set(0.0),
        created_at: Set(ts),
        updated_at: Set(ts),
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;
    Ok(row.into())
}

/// Product with its reviews, newest first.
pub async fn get_one(db: &DatabaseConnection, id: Uuid) -> ServiceResult<ProductDetails> {
    let row = find(db, id).await?;
    let reviews = review::Entity::find()
        .filter(review::Column::ProductId.eq(id))
        .order_by_desc(review::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(ProductDetails { product: row.into(), reviews: reviews.into_iter().map(Into::into).collect() })
}

pub async fn get_all(db: &DatabaseConnection, query: ProductListQuery) -> ServiceResult<Page<Product>> {
    let mut select = product::Entity::find()
        .order_by_asc(product::Column::CreatedAt)
        .order_by_asc(product::Column::Id);
    if let Some(store_id) = query.store_id {
        select = select.filter(product::Column::StoreId.eq(store_id));
    }
    if let Some(category) = query.category {
        select = select.filter(product::Column::Category.eq(category));
    }
    let page = Pagination::from_query(query.page).fetch(select, db).await?;
    Ok(page.map(Product::from))
}

#[instrument(skip(db, changes))]
pub async fn update_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid, changes: UpdateProductRequest) -> ServiceResult<Product> {
    let txn = db.begin().await?;
    let row = find(&txn, id).await?;
    owned_store(&txn, row.store_id, user_id, "update this product").await?;
    let mut am: product::ActiveModel = row.into();
    if let Some(v) = changes.name { am.name = Set(v); }
    if let Some(v) = changes.description { am.description = Set(Some(v)); }
    if let Some(v) = changes.price { am.price = Set(v); }
    if let Some(v) = changes.category { am.category = Set(v); }
    if let Some(v) = changes.stock { am.stock = Set(v); }
    if let Some(v) = changes.image_url { am.image_url = Set(Some(v)); }
    am.updated_at = Set(now());
    let updated = am.update(&txn).await?;
    txn.commit().await?;
    Ok(updated.into())
}

pub async fn delete_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid) -> ServiceResult<Product> {
    let txn = db.begin().await?;
    let row = find(&txn, id).await?;
    owned_store(&txn, row.store_id, user_id, "delete this product").await?;
    row.clone().delete(&txn).await?;
    txn.commit().await?;
    Ok(row.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, make_product, make_store, make_user};
    use common::types::{ProductCategory, StoreType, PAGE_SIZE};

    #[tokio::test]
    async fn only_store_owner_manages_products() -> anyhow::Result<()> {
        let db = get_db().await?;
        let owner = make_user(&db, "owner").await?;
        let other = make_user(&db, "other").await?;
        let store = make_store(&db, owner.id, StoreType::PetStore).await?;
        let req = CreateProductRequest {
            store_id: store.id,
            name: "Ball".into(),
            description: None,
            price: 3.5,
            category: ProductCategory::Toy,
            stock: 4,
            image_url: None,
        };
        assert!(matches!(create(&db, other.id, req.clone()).await, Err(ServiceError::Forbidden(_))));
        let created = create(&db, owner.id, req).await?;
        assert_eq!(created.average_rating, 0.0);

        let changes = UpdateProductRequest { stock: Some(0), ..Default::default() };
        assert!(matches!(update_one(&db, other.id, created.id, changes.clone()).await, Err(ServiceError::Forbidden(_))));
        assert_eq!(update_one(&db, owner.id, created.id, changes).await?.stock, 0);

        delete_one(&db, owner.id, created.id).await?;
        assert!(matches!(get_one(&db, created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn listing_filters_and_pages() -> anyhow::Result<()> {
        let db = get_db().await?;
        let owner = make_user(&db, "owner").await?;
        let store = make_store(&db, owner.id, StoreType::PetStore).await?;
        for i in 0..PAGE_SIZE {
            make_product(&db, store.id, &format!("food-{i}"), ProductCategory::Food).await?;
        }
        make_product(&db, store.id, "ball", ProductCategory::Toy).await?;

        let first = get_all(&db, ProductListQuery { page: Some(1), store_id: Some(store.id), category: None }).await?;
        assert_eq!(first.items.len() as u64, PAGE_SIZE);
        assert!(first.has_more);

        let toys = get_all(&db, ProductListQuery { page: None, store_id: None, category: Some(ProductCategory::Toy) }).await?;
        assert_eq!(toys.items.len(), 1);
        assert!(!toys.has_more);

        let empty = get_all(&db, ProductListQuery { page: None, store_id: Some(Uuid::new_v4()), category: None }).await?;
        assert!(empty.items.is_empty());
        Ok(())
    }
}
