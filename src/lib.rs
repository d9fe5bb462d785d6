//! Movie likes
//!
//! A concurrent in-memory user directory where each user keeps an
//! ordered, duplicate-free list of liked movies, plus a client for the
//! OMDb catalog used to search movies and resolve likes into details.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
