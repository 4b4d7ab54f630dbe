//! CLI module
//!
//! Provides subcommands for running the API and managing the database:
//! - `serve`: run the HTTP server (default)
//! - `migrate`: run pending database migrations and exit
//! - `seed`: populate the public catalog with default parts

pub mod migrate;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

/// FRC components API - parts catalog and team inventory tracking
#[derive(Parser)]
#[command(name = "frc-components-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Run pending database migrations and exit
    Migrate,

    /// Populate the public catalog with default FRC parts
    Seed,
}
