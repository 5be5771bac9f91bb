use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use common::types::{product::Product, ProductCategory};

use crate::store;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: ProductCategory,
    pub stock: i32,
    pub image_url: Option<String>,
    /// Mean of the product's review ratings, 0 with no reviews.
    pub average_rating: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Store }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Store => Entity::belongs_to(store::Entity)
                .from(Column::StoreId)
                .to(store::Column::Id)
                .into(),
        }
    }
}

impl Related<store::Entity> for Entity {
    fn to() -> RelationDef { Relation::Store.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: m.id,
            store_id: m.store_id,
            name: m.name,
            description: m.description,
            price: m.price,
            category: m.category,
            stock: m.stock,
            image_url: m.image_url,
            average_rating: m.average_rating,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
