use serde::{Deserialize, Serialize};

use crate::domain::user::UserResponse;

/// Login request; fields are optional so a missing one is a 400, not a 422
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub user: UserResponse,
}
