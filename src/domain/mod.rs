pub mod auth;
pub mod organization;
pub mod shared;
pub mod user;
