//! User Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::credentials::PasswordHasher;
use crate::error::{MISSING_FIELDS, MISSING_RESET_FIELDS, UserError, UserResult};
use crate::models::{LoginRequest, RegisterRequest, ResetPasswordRequest, User};
use crate::repository::UserRepository;

/// Registration, credential checks and password resets.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    hasher: PasswordHasher,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            hasher: self.hasher,
        }
    }
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService hashing at the default bcrypt cost
    pub fn new(repository: R) -> Self {
        Self::with_hasher(repository, PasswordHasher::default())
    }

    pub fn with_hasher(repository: R, hasher: PasswordHasher) -> Self {
        Self {
            repository: Arc::new(repository),
            hasher,
        }
    }

    /// Register a new account.
    ///
    /// The password is hashed before anything is written; a duplicate email
    /// is reported by the repository.
    #[instrument(skip(self, input), fields(email = ?input.email))]
    pub async fn register(&self, input: RegisterRequest) -> UserResult<User> {
        input
            .validate()
            .map_err(|_| UserError::Validation(MISSING_FIELDS.to_string()))?;

        let RegisterRequest {
            name: Some(name),
            email: Some(email),
            password: Some(password),
            role: Some(role),
        } = input
        else {
            return Err(UserError::Validation(MISSING_FIELDS.to_string()));
        };

        let password_hash = self.hasher.hash(password).await?;
        self.repository
            .insert(User::new(name, email, password_hash, role))
            .await
    }

    /// Return the user these credentials belong to.
    ///
    /// Unknown email, wrong password and missing or non-string fields all
    /// yield [`UserError::InvalidCredentials`].
    #[instrument(skip(self, input), fields(email = ?input.email))]
    pub async fn verify_credentials(&self, input: LoginRequest) -> UserResult<User> {
        let Some((email, password)) = input.credentials() else {
            return Err(UserError::InvalidCredentials);
        };

        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self
            .hasher
            .verify(password.to_string(), user.password_hash.clone())
            .await?
        {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Overwrite the password of the account with this email.
    ///
    /// An unknown email is not an error: nothing is written and the call
    /// succeeds.
    #[instrument(skip(self, input), fields(email = ?input.email))]
    pub async fn reset_password(&self, input: ResetPasswordRequest) -> UserResult<()> {
        input
            .validate()
            .map_err(|_| UserError::Validation(MISSING_RESET_FIELDS.to_string()))?;

        let (Some(email), Some(password)) = (input.email, input.password) else {
            return Err(UserError::Validation(MISSING_RESET_FIELDS.to_string()));
        };

        let password_hash = self.hasher.hash(password).await?;
        let matched = self
            .repository
            .update_password(&email, &password_hash)
            .await?;

        if !matched {
            tracing::warn!(email = %email, "Password reset requested for unknown email");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    fn fast_service(repo: MockUserRepository) -> UserService<MockUserRepository> {
        UserService::with_hasher(repo, PasswordHasher::new(4))
    }

    fn register_input(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: Some("Ada".to_string()),
            email: Some(email.to_string()),
            password: Some("secret".to_string()),
            role: Some("student".to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_insert()
            .withf(|user| user.email == "ada@example.com" && user.password_hash != "secret")
            .times(1)
            .returning(Ok);

        let user = fast_service(mock_repo)
            .register(register_input("ada@example.com"))
            .await
            .unwrap();

        assert!(bcrypt::verify("secret", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_register_with_missing_field_never_touches_store() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_insert().never();

        let mut input = register_input("ada@example.com");
        input.role = Some(String::new());

        let result = fast_service(mock_repo).register(input).await;
        match result {
            Err(UserError::Validation(msg)) => assert_eq!(msg, MISSING_FIELDS),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_register_propagates_duplicate_email() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_insert()
            .returning(|user| Err(UserError::DuplicateEmail(user.email)));

        let result = fast_service(mock_repo)
            .register(register_input("ada@example.com"))
            .await;
        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_login_with_unknown_email_is_invalid_credentials() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .with(eq("ghost@example.com"))
            .returning(|_| Ok(None));

        let result = fast_service(mock_repo)
            .verify_credentials(LoginRequest::new("ghost@example.com", "secret"))
            .await;
        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_with_missing_password_skips_lookup() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_by_email().never();

        let result = fast_service(mock_repo)
            .verify_credentials(LoginRequest {
                email: Some("ada@example.com".into()),
                password: None,
            })
            .await;
        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_with_numeric_password_skips_lookup() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_by_email().never();

        let result = fast_service(mock_repo)
            .verify_credentials(LoginRequest {
                email: Some("ada@example.com".into()),
                password: Some(12345.into()),
            })
            .await;
        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_accepts_existing_bcrypt_hash() {
        let stored = bcrypt::hash("secret", 4).unwrap();
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_by_email().returning(move |email| {
            Ok(Some(User::new("Ada", email, stored.clone(), "student")))
        });

        let user = fast_service(mock_repo)
            .verify_credentials(LoginRequest::new("ada@example.com", "secret"))
            .await
            .unwrap();
        assert_eq!(user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_reset_for_unknown_email_succeeds() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_update_password()
            .times(1)
            .returning(|_, _| Ok(false));

        let result = fast_service(mock_repo)
            .reset_password(ResetPasswordRequest {
                email: Some("ghost@example.com".to_string()),
                password: Some("new".to_string()),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_reset_without_password_is_rejected() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_update_password().never();

        let result = fast_service(mock_repo)
            .reset_password(ResetPasswordRequest {
                email: Some("ada@example.com".to_string()),
                password: None,
            })
            .await;
        match result {
            Err(UserError::Validation(msg)) => assert_eq!(msg, MISSING_RESET_FIELDS),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
