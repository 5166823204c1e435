//! Command-line interface for the launcher.
//!
//! All flags are optional; the defaults match the credentials the
//! development applications expect.

use clap::Parser;

use crate::settings::PgSettings;

/// Launch a detached PostgreSQL container for local development.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Cli {
    /// Postgres user
    #[arg(long, default_value = "axum")]
    pub user: String,

    /// Postgres password
    #[arg(long, default_value = "axum")]
    pub password: String,

    /// Postgres database
    #[arg(long, default_value = "axum")]
    pub database: String,

    /// Postgres host (accepted for parity with client tooling; not part of
    /// the launch command)
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Host port published to the container
    #[arg(long, default_value_t = 5432)]
    pub port: u16,
}

impl From<Cli> for PgSettings {
    fn from(cli: Cli) -> Self {
        Self {
            user: cli.user,
            password: cli.password,
            database: cli.database,
            host: cli.host,
            port: cli.port,
        }
    }
}
