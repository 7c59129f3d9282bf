use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::domain::auth::Permission;
use crate::domain::user::UserRole;
use crate::infrastructure::config::Config;
use crate::{
    domain::auth::JwtManager, error::AppError, infrastructure::repositories::UserRepository,
};
use uuid::Uuid;

/// User context injected into request extensions after authentication
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl AuthUser {
    /// `Forbidden` unless the user's role holds `permission`
    pub fn require(&self, permission: Permission) -> Result<(), AppError> {
        if permission.is_granted_to(self.role) {
            return Ok(());
        }

        tracing::warn!(
            user_id = %self.user_id,
            role = %self.role,
            permission = permission.key(),
            "Permission denied"
        );
        Err(AppError::Forbidden("Insufficient permissions".to_string()))
    }
}

/// Authentication middleware
pub async fn auth_middleware(
    State((user_repo, config)): State<(Arc<UserRepository>, Arc<Config>)>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization format".to_string()))?;

    let jwt_manager = JwtManager::new(config.jwt_secret.clone(), config.jwt_expiration_hours);
    let user_id = jwt_manager.extract_user_id(token)?;

    // Role comes from the database so a demotion takes effect before token expiry
    let user = user_repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    request.extensions_mut().insert(AuthUser {
        user_id: user.id,
        email: user.email,
        role: user.role,
    });

    Ok(next.run(request).await)
}
