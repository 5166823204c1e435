//! Binary entry point for the PostgreSQL container launcher.
//!
//! The launch logic lives in [`pg_docker_launch::run`]; this binary only
//! initialises logging and maps the result to an exit code: `0` on
//! success, `1` on error.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pg_docker_launch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = pg_docker_launch::run() {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
