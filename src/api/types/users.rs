//! User endpoint request types

use serde::Deserialize;

/// Body of `POST /users`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserBody {
    pub name: String,
}
