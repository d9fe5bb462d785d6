//! Infrastructure layer - External service implementations

pub mod catalog;
pub mod logging;
pub mod services;
pub mod user;
