//! Join table: vets working at a vet store.

use sea_orm::entity::prelude::*;

use crate::{vet_store, vet};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vet_store_vet")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vet_store_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub vet_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { VetStore, Vet }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::VetStore => Entity::belongs_to(vet_store::Entity)
                .from(Column::VetStoreId)
                .to(vet_store::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Vet => Entity::belongs_to(vet::Entity)
                .from(Column::VetId)
                .to(vet::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
