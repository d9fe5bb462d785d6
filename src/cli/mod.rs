//! CLI module for the movie likes service
//!
//! Provides the `serve` subcommand, which runs the HTTP API.

pub mod serve;

use clap::{Parser, Subcommand};

/// Movie likes - user directory with per-user movie likes backed by OMDb
#[derive(Parser)]
#[command(name = "movie-likes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}
