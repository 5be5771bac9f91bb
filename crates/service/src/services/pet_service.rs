use common::types::pet::{CreatePetRequest, Pet, UpdatePetRequest};
use models::{pet, user};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::instrument;
use uuid::Uuid;

use super::{ensure_owner, now};
use crate::errors::{ServiceError, ServiceResult};

#[instrument(skip(db, input))]
pub async fn create(db: &DatabaseConnection, user_id: Uuid, input: CreatePetRequest) -> ServiceResult<Pet> {
    if user::Entity::find_by_id(user_id).one(db).await?.is_none() {
        return Err(ServiceError::not_found("user"));
    }
    let ts = now();
    let row = pet::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        name: Set(input.name),
        species: Set(input.species),
        gender: Set(input.gender),
        breed: Set(input.breed),
        weight: Set(input.weight),
        birth_date: Set(input.birth_date),
        adoption_date: Set(input.adoption_date),
        notes: Set(input.notes),
        created_at: Set(ts),
        updated_at: Set(ts),
    }
    .insert(db)
    .await?;
    Ok(row.into())
}

pub async fn get_one(db: &DatabaseConnection, id: Uuid) -> ServiceResult<Pet> {
    pet::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(Pet::from)
        .ok_or_else(|| ServiceError::not_found("pet"))
}

/// Pets of one owner, oldest first.
pub async fn get_all(db: &DatabaseConnection, user_id: Uuid) -> ServiceResult<Vec<Pet>> {
    let rows = pet::Entity::find()
        .filter(pet::Column::UserId.eq(user_id))
        .order_by_asc(pet::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(Pet::from).collect())
}

#[instrument(skip(db, changes))]
pub async fn update_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid, changes: UpdatePetRequest) -> ServiceResult<Pet> {
    let txn = db.begin().await?;
    let row = pet::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("pet"))?;
    ensure_owner(row.user_id, user_id, "update this pet")?;
    let mut am: pet::ActiveModel = row.into();
    if let Some(v) = changes.name { am.name = Set(v); }
    if let Some(v) = changes.species { am.species = Set(v); }
    if let Some(v) = changes.gender { am.gender = Set(v); }
    if let Some(v) = changes.breed { am.breed = Set(Some(v)); }
    if let Some(v) = changes.weight { am.weight = Set(Some(v)); }
    if let Some(v) = changes.birth_date { am.birth_date = Set(Some(v)); }
    if let Some(v) = changes.adoption_date { am.adoption_date = Set(Some(v)); }
    if let Some(v) = changes.notes { am.notes = Set(Some(v)); }
    am.updated_at = Set(now());
    let updated = am.update(&txn).await?;
    txn.commit().await?;
    Ok(updated.into())
}

#[instrument(skip(db))]
pub async fn delete_one(db: &DatabaseConnection, user_id: Uuid, id: Uuid) -> ServiceResult<Pet> {
    let txn = db.begin().await?;
    let row = pet::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("pet"))?;
    ensure_owner(row.user_id, user_id, "delete this pet")?;
    row.clone().delete(&txn).await?;
    txn.commit().await?;
    Ok(row.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, make_user};
    use common::types::{Gender, Species};

    fn rex() -> CreatePetRequest {
        CreatePetRequest {
            name: "Rex".into(),
            species: Species::Dog,
            gender: Gender::Male,
            breed: Some("Beagle".into()),
            weight: Some(11.0),
            birth_date: None,
            adoption_date: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn pet_crud_is_scoped_to_owner() -> anyhow::Result<()> {
        let db = get_db().await?;
        let alice = make_user(&db, "alice").await?;
        let bob = make_user(&db, "bob").await?;

        let pet = create(&db, alice.id, rex()).await?;
        assert_eq!(pet.user_id, alice.id);
        assert_eq!(get_all(&db, alice.id).await?.len(), 1);
        assert!(get_all(&db, bob.id).await?.is_empty());

        let changes = UpdatePetRequest { name: Some("Max".into()), ..Default::default() };
        assert!(matches!(update_one(&db, bob.id, pet.id, changes.clone()).await, Err(ServiceError::Forbidden(_))));
        let updated = update_one(&db, alice.id, pet.id, changes).await?;
        assert_eq!(updated.name, "Max");
        assert_eq!(updated.breed.as_deref(), Some("Beagle"));

        assert!(matches!(delete_one(&db, bob.id, pet.id).await, Err(ServiceError::Forbidden(_))));
        let deleted = delete_one(&db, alice.id, pet.id).await?;
        assert_eq!(deleted.id, pet.id);
        assert!(matches!(get_one(&db, pet.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn missing_pet_is_not_found() -> anyhow::Result<()> {
        let db = get_db().await?;
        let alice = make_user(&db, "alice").await?;
        let missing = Uuid::new_v4();
        assert!(matches!(update_one(&db, alice.id, missing, UpdatePetRequest::default()).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(delete_one(&db, alice.id, missing).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
