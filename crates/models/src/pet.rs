use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use common::types::{pet::Pet, Gender, Species};

use crate::user;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub species: Species,
    pub gender: Gender,
    pub breed: Option<String>,
    pub weight: Option<f64>,
    pub birth_date: Option<Date>,
    pub adoption_date: Option<Date>,
    pub notes: Option<String>,
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

impl From<Model> for Pet {
    fn from(m: Model) -> Self {
        Pet {
            id: m.id,
            user_id: m.user_id,
            name: m.name,
            species: m.species,
            gender: m.gender,
            breed: m.breed,
            weight: m.weight,
            birth_date: m.birth_date,
            adoption_date: m.adoption_date,
            notes: m.notes,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
