use std::sync::Arc;

use chrono::Utc;

use crate::auth::password::{generate_salt, hash_password, verify_password};
use crate::domain::profile::ProfileView;
use crate::domain::repositories::{ProfileRepository, RepositoryError, UserRepository};
use crate::domain::user::value_objects::validate_password;
use crate::domain::user::{DisplayName, Email, NewUser, Username, DEFAULT_CITY_ID};
use crate::services::errors::{CredentialFailure, ServiceError, ServiceResult};

/// Registration, login and profile lookups
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { users, profiles }
    }

    /// Registers a new user
    ///
    /// Validates the input, refuses taken usernames, then stores the user,
    /// its salt and its profile (in the default city) as one unit.
    ///
    /// # Returns
    /// * `Ok(i64)` - The new user's ID
    /// * `Err(ServiceError::Validation)` - If a field is malformed
    /// * `Err(ServiceError::Conflict)` - If the username or email is taken
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        name: &str,
    ) -> ServiceResult<i64> {
        let username = Username::new(username).map_err(ServiceError::Validation)?;
        let email = Email::new(email).map_err(ServiceError::Validation)?;
        validate_password(password).map_err(ServiceError::Validation)?;
        let name = DisplayName::new(name).map_err(ServiceError::Validation)?;

        if self
            .users
            .find_by_username(username.as_str())
            .await?
            .is_some()
        {
            tracing::info!(username = %username, "Registration refused: username taken");
            return Err(ServiceError::Conflict("User already exists".to_string()));
        }

        let salt = generate_salt();
        let password_hash = hash_password(password, &salt);

        let new_user = NewUser {
            username,
            email,
            password_hash,
            salt,
            name,
            city_id: DEFAULT_CITY_ID,
            created_at: Utc::now(),
        };

        // The pre-check above can lose a race; the unique constraint decides
        match self.users.create(new_user).await {
            Ok(user_id) => {
                tracing::info!(user_id, "User registered");
                Ok(user_id)
            }
            Err(RepositoryError::UniqueViolation { constraint }) => {
                tracing::info!(%constraint, "Registration refused: unique constraint");
                let message = if constraint.contains("email") {
                    "Email already registered"
                } else {
                    "User already exists"
                };
                Err(ServiceError::Conflict(message.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Checks a username/password pair
    ///
    /// # Returns
    /// * `Ok(i64)` - The authenticated user's ID
    /// * `Err(ServiceError::InvalidCredentials)` - Unknown user, wrong password
    ///   or disabled account
    /// * `Err(ServiceError::ServerIntegrity)` - The user has no salt record
    pub async fn login(&self, username: &str, password: &str) -> ServiceResult<i64> {
        let user = match self.users.find_by_username(username).await? {
            Some(user) => user,
            None => {
                tracing::debug!(username, "Login failed: unknown user");
                return Err(ServiceError::InvalidCredentials(
                    CredentialFailure::UnknownUser,
                ));
            }
        };

        let salt = self.users.find_salt(user.id).await?.ok_or_else(|| {
            tracing::error!(user_id = user.id, "Salt record missing");
            ServiceError::ServerIntegrity(format!("Salt missing for user {}", user.id))
        })?;

        if !verify_password(password, &salt, &user.password_hash) {
            tracing::debug!(user_id = user.id, "Login failed: password mismatch");
            return Err(ServiceError::InvalidCredentials(
                CredentialFailure::PasswordMismatch,
            ));
        }

        if !user.is_active {
            tracing::debug!(user_id = user.id, "Login failed: account disabled");
            return Err(ServiceError::InvalidCredentials(
                CredentialFailure::InactiveUser,
            ));
        }

        tracing::info!(user_id = user.id, "Successful authorization");
        Ok(user.id)
    }

    /// Profile view of `username`, or `None` when the user does not exist
    pub async fn get_profile(&self, username: &str) -> ServiceResult<Option<ProfileView>> {
        Ok(self.profiles.find_by_username(username).await?)
    }

    /// Every profile, ordered by user id
    pub async fn get_all_profiles(&self) -> ServiceResult<Vec<ProfileView>> {
        Ok(self.profiles.list_all().await?)
    }
}
