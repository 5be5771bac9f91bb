use std::sync::Arc;

use common::types::user::{AuthResponse, CreateUserRequest, LoginRequest, UpdateUserRequest, UserProfile};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::{NewUser, UserChanges};
use super::repository::UserRepository;
use crate::auth::{Claims, PasswordHasher, TokenIssuer};
use crate::errors::{ServiceError, ServiceResult};

/// Account workflows, independent of the web framework.
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repo: Arc<R>,
    hasher: Arc<H>,
    tokens: TokenIssuer,
}

impl<R: UserRepository, H: PasswordHasher> Clone for UserService<R, H> {
    fn clone(&self) -> Self {
        Self { repo: self.repo.clone(), hasher: self.hasher.clone(), tokens: self.tokens.clone() }
    }
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    pub fn new(repo: Arc<R>, hasher: Arc<H>, tokens: TokenIssuer) -> Self { Self { repo, hasher, tokens } }

    pub fn tokens(&self) -> &TokenIssuer { &self.tokens }

    /// Register an account and sign the caller in.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::auth::{Argon2Hasher, TokenIssuer};
    /// use service::users::{repository::mock::MockUserRepository, UserService};
    /// use common::types::user::CreateUserRequest;
    /// let svc = UserService::new(Arc::new(MockUserRepository::default()), Arc::new(Argon2Hasher), TokenIssuer::new("secret", 12));
    /// let req = CreateUserRequest {
    ///     username: "doc".into(), email: "doc@example.com".into(), password: "Passw0rd!".into(),
    ///     first_name: "Doc".into(), last_name: "Test".into(), phone: None, avatar_url: None,
    /// };
    /// let out = tokio_test::block_on(svc.create(req)).unwrap();
    /// assert_eq!(out.user.username, "doc");
    /// assert!(!out.token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create(&self, input: CreateUserRequest) -> ServiceResult<AuthResponse> {
        let password_hash = self.hasher.hash(&input.password)?;
        let row = self
            .repo
            .insert(NewUser {
                username: input.username,
                email: input.email,
                password_hash,
                first_name: input.first_name,
                last_name: input.last_name,
                phone: input.phone,
                avatar_url: input.avatar_url,
            })
            .await?;
        let token = self.tokens.issue(row.id)?;
        info!(user_id = %row.id, "user_registered");
        Ok(AuthResponse { token, user: row.into() })
    }

    #[instrument(skip(self, input))]
    pub async fn login(&self, input: LoginRequest) -> ServiceResult<AuthResponse> {
        let identifier = input
            .identifier()
            .ok_or_else(|| ServiceError::bad_request("username or email is required"))?;
        let row = self
            .repo
            .find_by_identifier(identifier)
            .await?
            .ok_or_else(|| ServiceError::not_found("user"))?;
        if !self.hasher.verify(&input.password, &row.password)? {
            debug!(user_id = %row.id, "password mismatch");
            return Err(ServiceError::Unauthorized("invalid credentials".into()));
        }
        let token = self.tokens.issue(row.id)?;
        info!(user_id = %row.id, "user_logged_in");
        Ok(AuthResponse { token, user: row.into() })
    }

    /// Profile of the caller identified by a verified token.
    pub async fn get_by_token(&self, claims: &Claims) -> ServiceResult<UserProfile> { self.get_one(claims.user_id).await }

    pub async fn get_one(&self, id: Uuid) -> ServiceResult<UserProfile> {
        self.repo
            .find_by_id(id)
            .await?
            .map(UserProfile::from)
            .ok_or_else(|| ServiceError::not_found("user"))
    }

    /// All users; an empty table is reported as NotFound.
    pub async fn get_all(&self) -> ServiceResult<Vec<UserProfile>> {
        let rows = self.repo.list().await?;
        if rows.is_empty() {
            return Err(ServiceError::NotFound("no users found".into()));
        }
        Ok(rows.into_iter().map(UserProfile::from).collect())
    }

    #[instrument(skip(self, changes))]
    pub async fn update_one(&self, id: Uuid, changes: UpdateUserRequest) -> ServiceResult<UserProfile> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("user"));
        }
        let password_hash = changes.password.as_deref().map(|p| self.hasher.hash(p)).transpose()?;
        let row = self.repo.update(id, UserChanges::from_request(changes, password_hash)).await?;
        Ok(row.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_one(&self, id: Uuid) -> ServiceResult<UserProfile> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("user"));
        }
        let row = self.repo.delete(id).await?;
        info!(user_id = %id, "user_deleted");
        Ok(row.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::repository::mock::{sample_user, MockUserRepository};

    /// Always hashes to `"hashedPassword"`; accepts only `"password123"`.
    struct StubHasher;

    impl PasswordHasher for StubHasher {
        fn hash(&self, _plain: &str) -> Result<String, ServiceError> { Ok("hashedPassword".into()) }
        fn verify(&self, plain: &str, hashed: &str) -> Result<bool, ServiceError> {
            Ok(hashed == "hashedPassword" && plain == "password123")
        }
    }

    fn service(repo: MockUserRepository) -> (UserService<MockUserRepository, StubHasher>, Arc<MockUserRepository>) {
        let repo = Arc::new(repo);
        (UserService::new(repo.clone(), Arc::new(StubHasher), TokenIssuer::new("test-secret", 12)), repo)
    }

    fn create_request() -> CreateUserRequest {
        CreateUserRequest {
            username: "testuser".into(),
            email: "test@example.com".into(),
            password: "password123".into(),
            first_name: "Test".into(),
            last_name: "User".into(),
            phone: None,
            avatar_url: None,
        }
    }

    fn login(username: Option<&str>, email: Option<&str>, password: &str) -> LoginRequest {
        LoginRequest { username: username.map(Into::into), email: email.map(Into::into), password: password.into() }
    }

    #[tokio::test]
    async fn create_stores_hashed_password_and_returns_token() {
        let (svc, repo) = service(MockUserRepository::default());
        let out = svc.create(create_request()).await.unwrap();
        assert!(!out.token.is_empty());
        assert_eq!(out.user.username, "testuser");
        let stored = repo.stored();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].password, "hashedPassword");
        assert_eq!(svc.tokens().verify(&out.token).unwrap().user_id, out.user.id);
    }

    #[tokio::test]
    async fn create_maps_repository_failure_to_bad_request() {
        let (svc, _) = service(MockUserRepository::failing());
        let err = svc.create(create_request()).await.unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest(_)));
    }

    #[tokio::test]
    async fn login_by_username_or_email() {
        let (svc, _) = service(MockUserRepository::with_users(vec![sample_user("testuser", "hashedPassword")]));
        let by_name = svc.login(login(Some("testuser"), None, "password123")).await.unwrap();
        assert!(!by_name.token.is_empty());
        let by_email = svc.login(login(None, Some("testuser@example.com"), "password123")).await.unwrap();
        assert_eq!(by_email.user.id, by_name.user.id);
        let blank_name = svc.login(login(Some(""), Some("testuser@example.com"), "password123")).await.unwrap();
        assert_eq!(blank_name.user.id, by_name.user.id);
    }

    #[tokio::test]
    async fn login_unknown_user_is_not_found() {
        let (svc, _) = service(MockUserRepository::default());
        let err = svc.login(login(Some("ghost"), None, "password123")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn login_wrong_password_is_unauthorized() {
        let (svc, _) = service(MockUserRepository::with_users(vec![sample_user("testuser", "hashedPassword")]));
        let err = svc.login(login(Some("testuser"), None, "nope")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn get_by_token_returns_profile() {
        let user = sample_user("testuser", "hashedPassword");
        let (svc, _) = service(MockUserRepository::with_users(vec![user.clone()]));
        let claims = Claims { user_id: user.id, iat: 0, exp: 0 };
        let profile = svc.get_by_token(&claims).await.unwrap();
        assert_eq!(profile.id, user.id);
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password").is_none());

        let missing = Claims { user_id: Uuid::new_v4(), iat: 0, exp: 0 };
        assert!(matches!(svc.get_by_token(&missing).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn get_all_lists_seeded_users() {
        let (svc, _) = service(MockUserRepository::with_users(vec![
            sample_user("a", "hashedPassword"),
            sample_user("b", "hashedPassword"),
        ]));
        assert_eq!(svc.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_all_empty_is_not_found() {
        let (svc, _) = service(MockUserRepository::default());
        assert!(matches!(svc.get_all().await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_rehashes_password() {
        let user = sample_user("testuser", "old");
        let (svc, repo) = service(MockUserRepository::with_users(vec![user.clone()]));
        let changes = UpdateUserRequest { password: Some("newpassword1".into()), first_name: Some("New".into()), ..Default::default() };
        let profile = svc.update_one(user.id, changes).await.unwrap();
        assert_eq!(profile.first_name, "New");
        assert_eq!(repo.stored()[0].password, "hashedPassword");
    }

    #[tokio::test]
    async fn update_missing_user_never_writes() {
        let (svc, repo) = service(MockUserRepository::default());
        let err = svc.update_one(Uuid::new_v4(), UpdateUserRequest::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(!repo.calls().contains(&"update"));
    }

    #[tokio::test]
    async fn delete_missing_user_never_writes() {
        let (svc, repo) = service(MockUserRepository::default());
        let err = svc.delete_one(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(!repo.calls().contains(&"delete"));
    }

    #[tokio::test]
    async fn delete_returns_removed_profile() {
        let user = sample_user("testuser", "hashedPassword");
        let (svc, repo) = service(MockUserRepository::with_users(vec![user.clone()]));
        assert_eq!(svc.delete_one(user.id).await.unwrap().id, user.id);
        assert!(repo.stored().is_empty());
    }
}
