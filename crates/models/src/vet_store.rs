use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use common::types::store::VetStore;

use crate::store;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vet_store")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub store_id: Uuid,
    pub emergency_service: bool,
    pub license_number: Option<String>,
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

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for VetStore {
    fn from(m: Model) -> Self {
        VetStore {
            id: m.id,
            store_id: m.store_id,
            emergency_service: m.emergency_service,
            license_number: m.license_number,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
