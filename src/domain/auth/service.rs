use super::{verify_password, AuthServiceError, JwtManager, LoginRequest, LoginResponse, VerifyResponse};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::UserRepository;
use std::sync::Arc;
use uuid::Uuid;

pub struct AuthService {
    user_repo: Arc<UserRepository>,
    config: Arc<Config>,
}

impl AuthService {
    pub fn new(user_repo: Arc<UserRepository>, config: Arc<Config>) -> Self {
        Self { user_repo, config }
    }

    /// Exchange email + password for an access token
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AuthServiceError> {
        let (email, password) = match (request.email, request.password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                (email, password)
            }
            _ => {
                return Err(AuthServiceError::Invalid(
                    "Email and password are required".to_string(),
                ))
            }
        };

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if !verify_password(&user.password_hash, &password).await? {
            tracing::info!(user_id = %user.id, "Rejected login with wrong password");
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = self.jwt_manager().generate_token(&user)?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse {
            token,
            user: user.into(),
        })
    }

    /// Fresh user data for an already authenticated user
    pub async fn verify(&self, user_id: Uuid) -> Result<VerifyResponse, AuthServiceError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthServiceError::Unauthorized("User not found".to_string()))?;

        Ok(VerifyResponse { user: user.into() })
    }

    fn jwt_manager(&self) -> JwtManager {
        JwtManager::new(
            self.config.jwt_secret.clone(),
            self.config.jwt_expiration_hours,
        )
    }
}
