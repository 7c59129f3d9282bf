pub mod dto;
pub mod model;

pub use dto::UserResponse;
pub use model::{NewUser, User, UserRole};
