use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::domain::auth::{LoginRequest, LoginResponse, VerifyResponse};
use crate::{domain::auth::AuthService, error::AppResult, infrastructure::auth::AuthUser};

pub struct AuthController {
    auth_service: Arc<AuthService>,
}

impl AuthController {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }

    /// POST /api/auth/login - Exchange credentials for a token
    pub async fn login(
        State(controller): State<Arc<AuthController>>,
        Json(request): Json<LoginRequest>,
    ) -> AppResult<Json<LoginResponse>> {
        let response = controller.auth_service.login(request).await?;
        Ok(Json(response))
    }

    /// GET /api/auth/verify - Current user behind the bearer token
    pub async fn verify(
        State(controller): State<Arc<AuthController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<VerifyResponse>> {
        let response = controller.auth_service.verify(auth_user.user_id).await?;
        Ok(Json(response))
    }
}
