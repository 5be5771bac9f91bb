//! Join table: services offered by a provider.

use sea_orm::entity::prelude::*;

use crate::{service_provider, offering};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "service_provider_service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub service_provider_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub service_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { ServiceProvider, Service }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ServiceProvider => Entity::belongs_to(service_provider::Entity)
                .from(Column::ServiceProviderId)
                .to(service_provider::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Service => Entity::belongs_to(offering::Entity)
                .from(Column::ServiceId)
                .to(offering::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
