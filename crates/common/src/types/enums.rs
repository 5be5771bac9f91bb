//! Domain enumerations. With the `seaorm` feature they double as SeaORM
//! active enums stored as text columns.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "seaorm", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(feature = "seaorm", sea_orm(rs_type = "String", db_type = "Text"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Species {
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "DOG"))]
    Dog,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "CAT"))]
    Cat,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "BIRD"))]
    Bird,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "FISH"))]
    Fish,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "RABBIT"))]
    Rabbit,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "REPTILE"))]
    Reptile,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "OTHER"))]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "seaorm", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(feature = "seaorm", sea_orm(rs_type = "String", db_type = "Text"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "MALE"))]
    Male,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "FEMALE"))]
    Female,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "UNKNOWN"))]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "seaorm", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(feature = "seaorm", sea_orm(rs_type = "String", db_type = "Text"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreType {
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "PET_STORE"))]
    PetStore,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "VET_STORE"))]
    VetStore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "seaorm", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(feature = "seaorm", sea_orm(rs_type = "String", db_type = "Text"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "FOOD"))]
    Food,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "TOY"))]
    Toy,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "ACCESSORY"))]
    Accessory,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "MEDICINE"))]
    Medicine,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "GROOMING"))]
    Grooming,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "OTHER"))]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "seaorm", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(feature = "seaorm", sea_orm(rs_type = "String", db_type = "Text"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "PENDING"))]
    Pending,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "CONFIRMED"))]
    Confirmed,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "CANCELLED"))]
    Cancelled,
    #[cfg_attr(feature = "seaorm", sea_orm(string_value = "COMPLETED"))]
    Completed,
}

impl AppointmentStatus {
    /// Cancelled and completed appointments can no longer change status.
    pub fn is_final(self) -> bool {
        matches!(self, AppointmentStatus::Cancelled | AppointmentStatus::Completed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "PENDING",
            AppointmentStatus::Confirmed => "CONFIRMED",
            AppointmentStatus::Cancelled => "CANCELLED",
            AppointmentStatus::Completed => "COMPLETED",
        }
    }
}
