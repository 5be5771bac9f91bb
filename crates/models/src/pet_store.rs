use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use common::types::store::PetStore;

use crate::store;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet_store")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub store_id: Uuid,
    pub has_grooming: bool,
    pub has_boarding: bool,
    pub sells_live_animals: bool,
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

impl From<Model> for PetStore {
    fn from(m: Model) -> Self {
        PetStore {
            id: m.id,
            store_id: m.store_id,
            has_grooming: m.has_grooming,
            has_boarding: m.has_boarding,
            sells_live_animals: m.sells_live_animals,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
