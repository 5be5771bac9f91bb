use chrono::{DateTime, FixedOffset, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::enums::StoreType;
use super::location::Location;
use super::offering::Offering;
use super::product::Product;
use super::vet::Vet;

fn validate_clock_time(value: &str) -> Result<(), ValidationError> {
    if NaiveTime::parse_from_str(value, "%H:%M").is_ok() {
        return Ok(());
    }
    let mut err = ValidationError::new("clock_time");
    err.message = Some("time must use HH:MM".into());
    Err(err)
}

/// Opening hours of a store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    #[validate(custom(function = "validate_clock_time"))]
    pub open_time: Option<String>,
    #[validate(custom(function = "validate_clock_time"))]
    pub close_time: Option<String>,
    /// Free-form day list, e.g. `MON-FRI`.
    #[validate(length(max = 64))]
    pub open_days: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateStoreRequest {
    #[validate(length(min = 1, max = 128, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub store_type: StoreType,
    #[serde(default)]
    #[validate(length(min = 5, max = 32))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub availability: Option<Availability>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateStoreRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(length(min = 5, max = 32))]
    pub phone: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[validate(nested)]
    pub availability: Option<Availability>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreListQuery {
    pub page: Option<u64>,
    pub store_type: Option<StoreType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub store_type: StoreType,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub availability: Availability,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// A store with its sub-profile, location and catalogue expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StoreDetails {
    #[serde(flatten)]
    pub store: Store,
    pub pet_store: Option<PetStore>,
    pub vet_store: Option<VetStore>,
    pub location: Option<Location>,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreatePetStoreRequest {
    #[serde(default)]
    pub has_grooming: bool,
    #[serde(default)]
    pub has_boarding: bool,
    #[serde(default)]
    pub sells_live_animals: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetStoreRequest {
    pub has_grooming: Option<bool>,
    pub has_boarding: Option<bool>,
    pub sells_live_animals: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PetStore {
    pub id: Uuid,
    pub store_id: Uuid,
    pub has_grooming: bool,
    pub has_boarding: bool,
    pub sells_live_animals: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateVetStoreRequest {
    #[serde(default)]
    pub emergency_service: bool,
    #[serde(default)]
    #[validate(length(min = 1, max = 64))]
    pub license_number: Option<String>,
    #[serde(default)]
    pub vet_ids: Vec<Uuid>,
    #[serde(default)]
    pub service_ids: Vec<Uuid>,
}

/// `vetIds`/`serviceIds`, when present, replace the current memberships.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateVetStoreRequest {
    pub emergency_service: Option<bool>,
    #[validate(length(min = 1, max = 64))]
    pub license_number: Option<String>,
    pub vet_ids: Option<Vec<Uuid>>,
    pub service_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VetStore {
    pub id: Uuid,
    pub store_id: Uuid,
    pub emergency_service: bool,
    pub license_number: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// A vet store with its vets and services expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VetStoreDetails {
    #[serde(flatten)]
    pub vet_store: VetStore,
    pub vets: Vec<Vet>,
    pub services: Vec<Offering>,
}
