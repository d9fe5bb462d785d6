//! User domain
//!
//! This module provides the user entity, its validated identifier, and the
//! directory trait through which users are created, looked up and liked.

mod directory;
mod entity;
mod validation;

pub use directory::UserDirectory;
pub use entity::{User, UserId, UserSnapshot};
pub use validation::{validate_name, validate_user_id, UserValidationError};
