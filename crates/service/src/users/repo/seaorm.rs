use chrono::Utc;
use models::user;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::users::domain::{NewUser, UserChanges};
use crate::users::repository::UserRepository;

#[derive(Clone)]
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn insert(&self, input: NewUser) -> Result<user::Model, DbErr> {
        let now = Utc::now().fixed_offset();
        user::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(input.username),
            email: Set(input.email),
            password: Set(input.password_hash),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            phone: Set(input.phone),
            avatar_url: Set(input.avatar_url),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find_by_id(id).one(&self.db).await
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<user::Model>, DbErr> {
        let mut hits = user::Entity::find()
            .filter(
                Condition::any()
                    .add(user::Column::Username.eq(identifier))
                    .add(user::Column::Email.eq(identifier)),
            )
            .all(&self.db)
            .await?;
        // a username match wins over someone else's email
        hits.sort_by_key(|u| u.username != identifier);
        Ok(hits.into_iter().next())
    }

    async fn list(&self) -> Result<Vec<user::Model>, DbErr> {
        user::Entity::find().order_by_asc(user::Column::CreatedAt).all(&self.db).await
    }

    async fn update(&self, id: Uuid, changes: UserChanges) -> Result<user::Model, DbErr> {
        let txn = self.db.begin().await?;
        let mut am: user::ActiveModel = user::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {id}")))?
            .into();
        if let Some(v) = changes.username { am.username = Set(v); }
        if let Some(v) = changes.email { am.email = Set(v); }
        if let Some(v) = changes.password_hash { am.password = Set(v); }
        if let Some(v) = changes.first_name { am.first_name = Set(v); }
        if let Some(v) = changes.last_name { am.last_name = Set(v); }
        if let Some(v) = changes.phone { am.phone = Set(Some(v)); }
        if let Some(v) = changes.avatar_url { am.avatar_url = Set(Some(v)); }
        am.updated_at = Set(Utc::now().fixed_offset());
        let updated = am.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<user::Model, DbErr> {
        let txn = self.db.begin().await?;
        let row = user::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {id}")))?;
        row.clone().delete(&txn).await?;
        txn.commit().await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ServiceError;
    use crate::test_support::get_db;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.into(),
            email: email.into(),
            password_hash: "hash".into(),
            first_name: "Test".into(),
            last_name: "User".into(),
            phone: None,
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn identifier_prefers_username() -> anyhow::Result<()> {
        let repo = SeaOrmUserRepository::new(get_db().await?);
        let by_email = repo.insert(new_user("alice", "bob")).await?;
        let by_name = repo.insert(new_user("bob", "bob@example.com")).await?;
        assert_eq!(repo.find_by_identifier("bob").await?.map(|u| u.id), Some(by_name.id));
        assert_eq!(repo.find_by_identifier("alice").await?.map(|u| u.id), Some(by_email.id));
        assert!(repo.find_by_identifier("nobody").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() -> anyhow::Result<()> {
        let repo = SeaOrmUserRepository::new(get_db().await?);
        repo.insert(new_user("carol", "carol@example.com")).await?;
        assert!(repo.insert(new_user("carol", "other@example.com")).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_inside_transactions() -> anyhow::Result<()> {
        let repo = SeaOrmUserRepository::new(get_db().await?);
        let row = repo.insert(new_user("dave", "dave@example.com")).await?;
        let changes = UserChanges { phone: Some("555-0100".into()), ..Default::default() };
        assert_eq!(repo.update(row.id, changes).await?.phone.as_deref(), Some("555-0100"));
        assert!(matches!(repo.update(Uuid::new_v4(), UserChanges::default()).await, Err(DbErr::RecordNotFound(_))));
        assert_eq!(repo.delete(row.id).await?.id, row.id);
        assert!(repo.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn vanished_row_maps_to_not_found() -> anyhow::Result<()> {
        let repo = SeaOrmUserRepository::new(get_db().await?);
        let err: ServiceError = repo.delete(Uuid::new_v4()).await.unwrap_err().into();
        assert!(matches!(err, ServiceError::NotFound(_)));
        let err: ServiceError = repo.update(Uuid::new_v4(), UserChanges::default()).await.unwrap_err().into();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }
}
