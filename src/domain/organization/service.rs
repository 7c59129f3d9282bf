use super::error::OrganizationServiceError;
use super::{
    NewOrganization, OrganizationListResponse, OrganizationPayload, OrganizationResponse,
};
use crate::infrastructure::repositories::OrganizationRepository;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct OrganizationService {
    organization_repo: Arc<OrganizationRepository>,
}

impl OrganizationService {
    pub fn new(organization_repo: Arc<OrganizationRepository>) -> Self {
        Self { organization_repo }
    }
}

#[async_trait]
pub trait OrganizationServiceApi: Send + Sync {
    async fn list_organizations(&self) -> Result<OrganizationListResponse, OrganizationServiceError>;

    async fn get_organization(
        &self,
        organization_id: Uuid,
    ) -> Result<OrganizationResponse, OrganizationServiceError>;

    async fn create_organization(
        &self,
        actor_id: Uuid,
        payload: OrganizationPayload,
    ) -> Result<OrganizationResponse, OrganizationServiceError>;

    async fn update_organization(
        &self,
        organization_id: Uuid,
        payload: OrganizationPayload,
    ) -> Result<OrganizationResponse, OrganizationServiceError>;

    async fn delete_organization(&self, organization_id: Uuid)
        -> Result<(), OrganizationServiceError>;
}

#[async_trait]
impl OrganizationServiceApi for OrganizationService {
    async fn list_organizations(&self) -> Result<OrganizationListResponse, OrganizationServiceError> {
        let organizations = self.organization_repo.list_all().await?;
        let data: Vec<OrganizationResponse> = organizations
            .into_iter()
            .map(OrganizationResponse::from)
            .collect();

        Ok(OrganizationListResponse {
            total: data.len(),
            data,
        })
    }

    async fn get_organization(
        &self,
        organization_id: Uuid,
    ) -> Result<OrganizationResponse, OrganizationServiceError> {
        let organization = self
            .organization_repo
            .find_by_id(organization_id)
            .await?
            .ok_or(OrganizationServiceError::NotFound)?;

        Ok(organization.into())
    }

    async fn create_organization(
        &self,
        actor_id: Uuid,
        payload: OrganizationPayload,
    ) -> Result<OrganizationResponse, OrganizationServiceError> {
        let new_organization = payload.into_new_organization()?;
        self.ensure_code_available(&new_organization, None).await?;

        let organization = self
            .organization_repo
            .create(&new_organization, Some(actor_id))
            .await
            .map_err(code_conflict)?;

        tracing::info!(
            organization_id = %organization.id,
            name = %organization.name,
            "Organization created"
        );

        Ok(organization.into())
    }

    async fn update_organization(
        &self,
        organization_id: Uuid,
        payload: OrganizationPayload,
    ) -> Result<OrganizationResponse, OrganizationServiceError> {
        let existing = self
            .organization_repo
            .find_by_id(organization_id)
            .await?
            .ok_or(OrganizationServiceError::NotFound)?;

        let changes = payload.overlay(&existing).into_new_organization()?;
        self.ensure_code_available(&changes, Some(organization_id))
            .await?;

        let organization = self
            .organization_repo
            .update(organization_id, &changes)
            .await
            .map_err(code_conflict)?
            .ok_or(OrganizationServiceError::NotFound)?;

        tracing::info!(organization_id = %organization.id, "Organization updated");

        Ok(organization.into())
    }

    async fn delete_organization(
        &self,
        organization_id: Uuid,
    ) -> Result<(), OrganizationServiceError> {
        let deleted = self.organization_repo.delete(organization_id).await?;
        if !deleted {
            return Err(OrganizationServiceError::NotFound);
        }

        tracing::info!(organization_id = %organization_id, "Organization deleted");
        Ok(())
    }
}

impl OrganizationService {
    async fn ensure_code_available(
        &self,
        organization: &NewOrganization,
        current_id: Option<Uuid>,
    ) -> Result<(), OrganizationServiceError> {
        let Some(code) = organization.code.as_deref() else {
            return Ok(());
        };

        match self.organization_repo.find_by_code(code).await? {
            Some(other) if Some(other.id) != current_id => Err(code_taken()),
            _ => Ok(()),
        }
    }
}

fn code_taken() -> OrganizationServiceError {
    OrganizationServiceError::Invalid("Organization code already exists".to_string())
}

// A concurrent insert can still trip the unique index after the lookup passed
fn code_conflict(err: crate::error::AppError) -> OrganizationServiceError {
    if err.is_conflict() {
        code_taken()
    } else {
        err.into()
    }
}
