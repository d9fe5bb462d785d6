//! Application state shared by all handlers

use crate::infrastructure::services::UserService;

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

impl AppState {
    pub fn new(user_service: UserService) -> Self {
        Self { user_service }
    }
}
