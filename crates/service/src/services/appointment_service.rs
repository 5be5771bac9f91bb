use common::types::appointment::{Appointment, CreateAppointmentRequest, UpdateAppointmentRequest};
use common::types::AppointmentStatus;
use models::{appointment, pet, vet_store};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{ensure_owner, now};
use crate::errors::{ServiceError, ServiceResult};
use crate::reconcile::ensure_all_exist;

async fn find<C: ConnectionTrait>(conn: &C, id: Uuid) -> ServiceResult<appointment::Model> {
    appointment::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| ServiceError::not_found("appointment"))
}

/// A pet on an appointment must belong to the booking user.
async fn check_pet<C: ConnectionTrait>(conn: &C, user_id: Uuid, pet_id: Uuid) -> ServiceResult<()> {
    let row = pet::Entity::find_by_id(pet_id)
        .one(conn)
        .await?
        .ok_or_else(|| ServiceError::bad_request("pet does not exist"))?;
    ensure_owner(row.user_id, user_id, "book appointments for this pet")
}

#[instrument(skip(db, input), fields(vet_store_id = %input.vet_store_id))]
pub async fn create(db: &DatabaseConnection, user_id: Uuid, input: CreateAppointmentRequest) -> ServiceResult<Appointment> {
    let txn = db.begin().await?;
    ensure_all_exist::<vet_store::Entity, _>(&txn, vet_store::Column::Id, &[input.vet_store_id], "vet store").await?;
    if let Some(pet_id) = input.pet_id {
        check_pet(&txn, user_id, pet_id).await?;
    }
    let ts = now();
    let row = appointment::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        vet_store_id: Set(input.vet_store_id),
        pet_id: Set(input.pet_id),
        date: Set(input.date),
        duration_minutes: Set(input.duration_minutes),
        status: Set(AppointmentStatus::Pending),
        notes: Set(input.notes),
        created_at: Set(ts),
        updated_at: Set(ts),
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;
    info!(appointment_id = %row.id, "appointment_booked");
    Ok(row.into())
}

/// Only the booking user can see an appointment.
pub async fn get_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid) -> ServiceResult<Appointment> {
    let row = find(db, id).await?;
    ensure_owner(row.user_id, user_id, "view this appointment")?;
    Ok(row.into())
}

pub async fn get_all(db: &DatabaseConnection, user_id: Uuid) -> ServiceResult<Vec<Appointment>> {
    let rows = appointment::Entity::find()
        .filter(appointment::Column::UserId.eq(user_id))
        .order_by_asc(appointment::Column::Date)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(Appointment::from).collect())
}

/// Cancelled and completed appointments can no longer change status.
#[instrument(skip(db, changes))]
pub async fn update_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid, changes: UpdateAppointmentRequest) -> ServiceResult<Appointment> {
    let txn = db.begin().await?;
    let row = find(&txn, id).await?;
    ensure_owner(row.user_id, user_id, "update this appointment")?;
    if changes.status.is_some() && row.status.is_final() {
        return Err(ServiceError::bad_request("appointment is already closed"));
    }
    let mut am: appointment::ActiveModel = row.into();
    if let Some(v) = changes.date { am.date = Set(v); }
    if let Some(v) = changes.duration_minutes { am.duration_minutes = Set(v); }
    if let Some(v) = changes.status { am.status = Set(v); }
    if let Some(v) = changes.notes { am.notes = Set(Some(v)); }
    am.updated_at = Set(now());
    let updated = am.update(&txn).await?;
    txn.commit().await?;
    Ok(updated.into())
}

#[instrument(skip(db))]
pub async fn cancel(db: &DatabaseConnection, user_id: Uuid, id: Uuid) -> ServiceResult<Appointment> {
    let txn = db.begin().await?;
    let row = find(&txn, id).await?;
    ensure_owner(row.user_id, user_id, "cancel this appointment")?;
    if row.status.is_final() {
        return Err(ServiceError::bad_request(format!("appointment is already {}", row.status.as_str().to_lowercase())));
    }
    let mut am: appointment::ActiveModel = row.into();
    am.status = Set(AppointmentStatus::Cancelled);
    am.updated_at = Set(now());
    let updated = am.update(&txn).await?;
    txn.commit().await?;
    info!(appointment_id = %id, "appointment_cancelled");
    Ok(updated.into())
}

pub async fn delete_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid) -> ServiceResult<Appointment> {
    let txn = db.begin().await?;
    let row = find(&txn, id).await?;
    ensure_owner(row.user_id, user_id, "delete this appointment")?;
    row.clone().delete(&txn).await?;
    txn.commit().await?;
    Ok(row.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, make_store, make_user, make_vet_store};
    use chrono::{Duration, Utc};
    use common::types::StoreType;

    async fn clinic(db: &DatabaseConnection) -> anyhow::Result<vet_store::Model> {
        let owner = make_user(db, "clinic-owner").await?;
        let store = make_store(db, owner.id, StoreType::VetStore).await?;
        make_vet_store(db, store.id).await
    }

    fn booking(vet_store_id: Uuid, days: i64) -> CreateAppointmentRequest {
        CreateAppointmentRequest {
            vet_store_id,
            pet_id: None,
            date: (Utc::now() + Duration::days(days)).fixed_offset(),
            duration_minutes: 30,
            notes: None,
        }
    }

    #[tokio::test]
    async fn booking_starts_pending_and_lists_by_date() -> anyhow::Result<()> {
        let db = get_db().await?;
        let vs = clinic(&db).await?;
        let user = make_user(&db, "owner").await?;
        let later = create(&db, user.id, booking(vs.id, 5)).await?;
        let sooner = create(&db, user.id, booking(vs.id, 1)).await?;
        assert_eq!(later.status, AppointmentStatus::Pending);

        let listed: Vec<Uuid> = get_all(&db, user.id).await?.into_iter().map(|a| a.id).collect();
        assert_eq!(listed, vec![sooner.id, later.id]);
        Ok(())
    }

    #[tokio::test]
    async fn cancel_rejects_closed_appointments() -> anyhow::Result<()> {
        let db = get_db().await?;
        let vs = clinic(&db).await?;
        let user = make_user(&db, "owner").await?;
        let stranger = make_user(&db, "stranger").await?;
        let appt = create(&db, user.id, booking(vs.id, 2)).await?;

        assert!(matches!(cancel(&db, stranger.id, appt.id).await, Err(ServiceError::Forbidden(_))));
        let cancelled = cancel(&db, user.id, appt.id).await?;
        assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
        assert!(matches!(cancel(&db, user.id, appt.id).await, Err(ServiceError::BadRequest(_))));

        let reopen = UpdateAppointmentRequest { status: Some(AppointmentStatus::Pending), ..Default::default() };
        assert!(matches!(update_one(&db, user.id, appt.id, reopen).await, Err(ServiceError::BadRequest(_))));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_vet_store_is_bad_request() -> anyhow::Result<()> {
        let db = get_db().await?;
        let user = make_user(&db, "owner").await?;
        assert!(matches!(create(&db, user.id, booking(Uuid::new_v4(), 1)).await, Err(ServiceError::BadRequest(_))));
        Ok(())
    }

    #[tokio::test]
    async fn other_users_pet_is_forbidden() -> anyhow::Result<()> {
        let db = get_db().await?;
        let vs = clinic(&db).await?;
        let user = make_user(&db, "owner").await?;
        let other = make_user(&db, "other").await?;
        let pet = crate::services::pet_service::create(
            &db,
            other.id,
            common::types::pet::CreatePetRequest {
                name: "Tom".into(),
                species: common::types::Species::Cat,
                gender: common::types::Gender::Male,
                breed: None,
                weight: None,
                birth_date: None,
                adoption_date: None,
                notes: None,
            },
        )
        .await?;
        let mut req = booking(vs.id, 1);
        req.pet_id = Some(pet.id);
        assert!(matches!(create(&db, user.id, req).await, Err(ServiceError::Forbidden(_))));
        Ok(())
    }
}
