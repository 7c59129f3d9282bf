pub mod dto;
pub mod error;
pub mod hashing;
pub mod jwt;
pub mod permissions;
pub mod service;

pub use dto::{LoginRequest, LoginResponse, VerifyResponse};
pub use error::AuthServiceError;
pub use hashing::{hash_password, verify_password};
pub use jwt::{Claims, JwtManager};
pub use permissions::Permission;
pub use service::AuthService;
