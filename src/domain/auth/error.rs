use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

impl From<AppError> for AuthServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => AuthServiceError::Invalid(msg),
            AppError::Unauthorized(msg) => AuthServiceError::Unauthorized(msg),
            _ => AuthServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<AuthServiceError> for AppError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::Invalid(msg) => AppError::BadRequest(msg),
            AuthServiceError::InvalidCredentials => {
                AppError::Unauthorized("Invalid credentials".to_string())
            }
            AuthServiceError::Unauthorized(msg) => AppError::Unauthorized(msg),
            AuthServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
