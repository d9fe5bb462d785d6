//! Application services

mod user_service;

pub use user_service::{CreateUserRequest, UserService};
