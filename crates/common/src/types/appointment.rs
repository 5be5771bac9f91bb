use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::enums::AppointmentStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub vet_store_id: Uuid,
    #[serde(default)]
    pub pet_id: Option<Uuid>,
    pub date: DateTime<FixedOffset>,
    #[validate(range(min = 15, max = 480, message = "durationMinutes must be between 15 and 480"))]
    pub duration_minutes: i32,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub date: Option<DateTime<FixedOffset>>,
    #[validate(range(min = 15, max = 480, message = "durationMinutes must be between 15 and 480"))]
    pub duration_minutes: Option<i32>,
    pub status: Option<AppointmentStatus>,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vet_store_id: Uuid,
    pub pet_id: Option<Uuid>,
    pub date: DateTime<FixedOffset>,
    pub duration_minutes: i32,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}
