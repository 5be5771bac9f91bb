use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use common::types::{appointment::Appointment, AppointmentStatus};

use crate::{pet, user, vet_store};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub vet_store_id: Uuid,
    pub pet_id: Option<Uuid>,
    pub date: DateTimeWithTimeZone,
    pub duration_minutes: i32,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    VetStore,
    Pet,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
            Relation::VetStore => Entity::belongs_to(vet_store::Entity)
                .from(Column::VetStoreId)
                .to(vet_store::Column::Id)
                .into(),
            Relation::Pet => Entity::belongs_to(pet::Entity)
                .from(Column::PetId)
                .to(pet::Column::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Appointment {
    fn from(m: Model) -> Self {
        Appointment {
            id: m.id,
            user_id: m.user_id,
            vet_store_id: m.vet_store_id,
            pet_id: m.pet_id,
            date: m.date,
            duration_minutes: m.duration_minutes,
            status: m.status,
            notes: m.notes,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
