use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::enums::{Gender, Species};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    #[validate(length(min = 1, max = 64, message = "name is required"))]
    pub name: String,
    pub species: Species,
    pub gender: Gender,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub breed: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 500.0, message = "weight must be between 0 and 500 kg"))]
    pub weight: Option<f64>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub adoption_date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: Option<String>,
    pub species: Option<Species>,
    pub gender: Option<Gender>,
    #[validate(length(max = 64))]
    pub breed: Option<String>,
    #[validate(range(min = 0.0, max = 500.0, message = "weight must be between 0 and 500 kg"))]
    pub weight: Option<f64>,
    pub birth_date: Option<NaiveDate>,
    pub adoption_date: Option<NaiveDate>,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub species: Species,
    pub gender: Gender,
    pub breed: Option<String>,
    pub weight: Option<f64>,
    pub birth_date: Option<NaiveDate>,
    pub adoption_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}
