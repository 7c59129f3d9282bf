use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::Permission;
use crate::domain::organization::{
    OrganizationListResponse, OrganizationPayload, OrganizationResponse,
};
use crate::{
    domain::organization::{OrganizationService, OrganizationServiceApi},
    error::AppResult,
    infrastructure::auth::AuthUser,
};

pub struct OrganizationController {
    organization_service: Arc<OrganizationService>,
}

impl OrganizationController {
    pub fn new(organization_service: Arc<OrganizationService>) -> Self {
        Self {
            organization_service,
        }
    }

    /// GET /api/organizations - All organizations sorted by name
    pub async fn list_organizations(
        State(controller): State<Arc<OrganizationController>>,
    ) -> AppResult<Json<OrganizationListResponse>> {
        let organizations = controller
            .organization_service
            .list_organizations()
            .await?;
        Ok(Json(organizations))
    }

    /// GET /api/organizations/{id}
    pub async fn get_organization(
        State(controller): State<Arc<OrganizationController>>,
        Path(organization_id): Path<Uuid>,
    ) -> AppResult<Json<OrganizationResponse>> {
        let organization = controller
            .organization_service
            .get_organization(organization_id)
            .await?;
        Ok(Json(organization))
    }

    /// POST /api/organizations - Create organization
    pub async fn create_organization(
        State(controller): State<Arc<OrganizationController>>,
        Extension(auth_user): Extension<AuthUser>,
        Json(payload): Json<OrganizationPayload>,
    ) -> AppResult<(StatusCode, Json<OrganizationResponse>)> {
        auth_user.require(Permission::OrganizationsWrite)?;

        let organization = controller
            .organization_service
            .create_organization(auth_user.user_id, payload)
            .await?;
        Ok((StatusCode::CREATED, Json(organization)))
    }

    /// PUT /api/organizations/{id} - Update organization, omitted fields keep their value
    pub async fn update_organization(
        State(controller): State<Arc<OrganizationController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(organization_id): Path<Uuid>,
        Json(payload): Json<OrganizationPayload>,
    ) -> AppResult<Json<OrganizationResponse>> {
        auth_user.require(Permission::OrganizationsWrite)?;

        let organization = controller
            .organization_service
            .update_organization(organization_id, payload)
            .await?;
        Ok(Json(organization))
    }

    /// DELETE /api/organizations/{id}
    pub async fn delete_organization(
        State(controller): State<Arc<OrganizationController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(organization_id): Path<Uuid>,
    ) -> AppResult<Json<Value>> {
        auth_user.require(Permission::OrganizationsWrite)?;

        controller
            .organization_service
            .delete_organization(organization_id)
            .await?;
        Ok(Json(json!({ "message": "Organization deleted" })))
    }
}
