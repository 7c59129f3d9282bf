pub mod organization_repository;
pub mod user_repository;

pub use organization_repository::OrganizationRepository;
pub use user_repository::UserRepository;
