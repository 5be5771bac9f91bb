use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use common::types::{store::{Availability, Store}, StoreType};

use crate::user;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "store")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub store_type: StoreType,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub open_days: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { User }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn availability(&self) -> Availability {
        Availability {
            open_time: self.open_time.clone(),
            close_time: self.close_time.clone(),
            open_days: self.open_days.clone(),
        }
    }
}

impl From<Model> for Store {
    fn from(m: Model) -> Self {
        let availability = m.availability();
        Store {
            id: m.id,
            user_id: m.user_id,
            name: m.name,
            description: m.description,
            store_type: m.store_type,
            phone: m.phone,
            email: m.email,
            availability,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
