use async_trait::async_trait;
use models::user;
use sea_orm::DbErr;
use uuid::Uuid;

use super::domain::{NewUser, UserChanges};

/// Persistence for user rows.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, input: NewUser) -> Result<user::Model, DbErr>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<user::Model>, DbErr>;
    /// Match against username first, then email.
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<user::Model>, DbErr>;
    async fn list(&self) -> Result<Vec<user::Model>, DbErr>;
    async fn update(&self, id: Uuid, changes: UserChanges) -> Result<user::Model, DbErr>;
    async fn delete(&self, id: Uuid) -> Result<user::Model, DbErr>;
}

/// In-memory repository for tests: records every call and can be told to
/// reject writes.
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<Vec<user::Model>>,
        calls: Mutex<Vec<&'static str>>,
        fail_writes: bool,
    }

    impl MockUserRepository {
        pub fn with_users(users: Vec<user::Model>) -> Self {
            Self { users: Mutex::new(users), ..Default::default() }
        }

        /// Every insert/update/delete returns a database error.
        pub fn failing() -> Self { Self { fail_writes: true, ..Default::default() } }

        pub fn calls(&self) -> Vec<&'static str> { self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone() }

        pub fn stored(&self) -> Vec<user::Model> { self.users.lock().unwrap_or_else(|e| e.into_inner()).clone() }

        fn record(&self, call: &'static str) { self.calls.lock().unwrap_or_else(|e| e.into_inner()).push(call); }

        fn reject(&self) -> Result<(), DbErr> {
            if self.fail_writes {
                Err(DbErr::Custom("simulated repository failure".into()))
            } else {
                Ok(())
            }
        }
    }

    pub fn sample_user(username: &str, password_hash: &str) -> user::Model {
        let now = Utc::now().fixed_offset();
        user::Model {
            id: Uuid::new_v4(),
            username: username.into(),
            email: format!("{username}@example.com"),
            password: password_hash.into(),
            first_name: "Test".into(),
            last_name: "User".into(),
            phone: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn insert(&self, input: NewUser) -> Result<user::Model, DbErr> {
            self.record("insert");
            self.reject()?;
            let now = Utc::now().fixed_offset();
            let row = user::Model {
                id: Uuid::new_v4(),
                username: input.username,
                email: input.email,
                password: input.password_hash,
                first_name: input.first_name,
                last_name: input.last_name,
                phone: input.phone,
                avatar_url: input.avatar_url,
                created_at: now,
                updated_at: now,
            };
            self.users.lock().unwrap_or_else(|e| e.into_inner()).push(row.clone());
            Ok(row)
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<user::Model>, DbErr> {
            self.record("find_by_id");
            Ok(self.users.lock().unwrap_or_else(|e| e.into_inner()).iter().find(|u| u.id == id).cloned())
        }

        async fn find_by_identifier(&self, identifier: &str) -> Result<Option<user::Model>, DbErr> {
            self.record("find_by_identifier");
            let users = self.users.lock().unwrap_or_else(|e| e.into_inner());
            Ok(users
                .iter()
                .find(|u| u.username == identifier)
                .or_else(|| users.iter().find(|u| u.email == identifier))
                .cloned())
        }

        async fn list(&self) -> Result<Vec<user::Model>, DbErr> {
            self.record("list");
            Ok(self.users.lock().unwrap_or_else(|e| e.into_inner()).clone())
        }

        async fn update(&self, id: Uuid, changes: UserChanges) -> Result<user::Model, DbErr> {
            self.record("update");
            self.reject()?;
            let mut users = self.users.lock().unwrap_or_else(|e| e.into_inner());
            let row = users
                .iter_mut()
                .find(|u| u.id == id)
                .ok_or_else(|| DbErr::RecordNotFound(format!("user {id}")))?;
            if let Some(v) = changes.username { row.username = v; }
            if let Some(v) = changes.email { row.email = v; }
            if let Some(v) = changes.password_hash { row.password = v; }
            if let Some(v) = changes.first_name { row.first_name = v; }
            if let Some(v) = changes.last_name { row.last_name = v; }
            if let Some(v) = changes.phone { row.phone = Some(v); }
            if let Some(v) = changes.avatar_url { row.avatar_url = Some(v); }
            row.updated_at = Utc::now().fixed_offset();
            Ok(row.clone())
        }

        async fn delete(&self, id: Uuid) -> Result<user::Model, DbErr> {
            self.record("delete");
            self.reject()?;
            let mut users = self.users.lock().unwrap_or_else(|e| e.into_inner());
            let pos = users
                .iter()
                .position(|u| u.id == id)
                .ok_or_else(|| DbErr::RecordNotFound(format!("user {id}")))?;
            Ok(users.remove(pos))
        }
    }
}
