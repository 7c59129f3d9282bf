pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{OrganizationListResponse, OrganizationPayload, OrganizationResponse};
pub use error::OrganizationServiceError;
pub use model::{NewOrganization, Organization};
pub use service::{OrganizationService, OrganizationServiceApi};
