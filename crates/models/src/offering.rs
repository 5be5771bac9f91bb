//! The `service` table: something a provider or vet store offers.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use common::types::offering::Offering;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub duration_minutes: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Offering {
    fn from(m: Model) -> Self {
        Offering {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            duration_minutes: m.duration_minutes,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
