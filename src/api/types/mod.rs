//! API request/response types

mod error;
mod json;
mod movies;
mod users;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use movies::{MovieListResponse, SearchParams};
pub use users::CreateUserBody;
