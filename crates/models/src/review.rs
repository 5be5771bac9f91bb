use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use common::types::review::Review;

use crate::{product, service_provider, store, user};

/// A review targets at most one product, one provider and one store.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Option<Uuid>,
    pub service_provider_id: Option<Uuid>,
    pub store_id: Option<Uuid>,
    pub rating: i32,
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Product,
    ServiceProvider,
    Store,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
            Relation::Product => Entity::belongs_to(product::Entity)
                .from(Column::ProductId)
                .to(product::Column::Id)
                .into(),
            Relation::ServiceProvider => Entity::belongs_to(service_provider::Entity)
                .from(Column::ServiceProviderId)
                .to(service_provider::Column::Id)
                .into(),
            Relation::Store => Entity::belongs_to(store::Entity)
                .from(Column::StoreId)
                .to(store::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Review {
    fn from(m: Model) -> Self {
        Review {
            id: m.id,
            user_id: m.user_id,
            product_id: m.product_id,
            service_provider_id: m.service_provider_id,
            store_id: m.store_id,
            rating: m.rating,
            content: m.content,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
