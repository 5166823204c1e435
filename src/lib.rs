//! Launches a detached PostgreSQL container for local development.
//!
//! Connection settings (user, password, database name, host, port) come
//! from command-line flags with defaults matching the development
//! applications. The launcher shells out to a Docker-compatible container
//! runtime and reports failure when the runtime is missing or exits
//! non-zero. The `--host` flag is carried for parity with client tooling
//! but plays no part in the launch command.

pub mod cli;
pub mod launcher;
pub mod settings;

use anyhow::Context;
use clap::Parser as _;
use tracing::info;

use crate::cli::Cli;
use crate::launcher::Launcher;
use crate::settings::PgSettings;

/// Parses the command line and launches the container.
///
/// # Errors
/// Returns an error when the container runtime cannot be started or exits
/// with a non-zero status.
pub fn run() -> anyhow::Result<()> {
    let settings = PgSettings::from(Cli::parse());
    info!(
        user = %settings.user,
        database = %settings.database,
        port = settings.port,
        "launching PostgreSQL container"
    );
    Launcher::default()
        .launch(&settings)
        .context("could not launch the PostgreSQL container")
}
