use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum OrganizationServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("organization not found")]
    NotFound,
    #[error("conflict: {0}")]
    Conflict(String),
}

impl From<AppError> for OrganizationServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => OrganizationServiceError::Invalid(msg),
            AppError::NotFound(_) => OrganizationServiceError::NotFound,
            AppError::Conflict(msg) => OrganizationServiceError::Conflict(msg),
            _ => OrganizationServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<OrganizationServiceError> for AppError {
    fn from(err: OrganizationServiceError) -> Self {
        match err {
            OrganizationServiceError::Invalid(msg) => AppError::BadRequest(msg),
            OrganizationServiceError::NotFound => {
                AppError::NotFound("Organization not found".to_string())
            }
            OrganizationServiceError::Conflict(msg) => AppError::Conflict(msg),
            OrganizationServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
