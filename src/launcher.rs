//! Builds and runs the container runtime invocation.
//!
//! The runtime is an opaque Docker-compatible CLI. One blocking `run`
//! invocation is made per process; the runtime's stdout and stderr are
//! inherited so its output streams straight through to the caller.

use std::io;
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::{debug, info};

use crate::settings::PgSettings;

/// Program invoked when no override is given.
pub const DEFAULT_RUNTIME: &str = "docker";

/// Image the container is created from, and the server binary it runs.
const IMAGE: &str = "postgres";

/// Errors that can occur when launching the container.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The runtime binary could not be started.
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        /// Program that was invoked.
        program: String,
        /// Underlying spawn failure.
        #[source]
        source: io::Error,
    },
    /// The runtime started but exited with a non-zero status.
    #[error("`{program}` exited with {status}")]
    CommandFailed {
        /// Program that was invoked.
        program: String,
        /// Exit status reported by the runtime.
        status: ExitStatus,
    },
}

/// Handle on the external container runtime CLI.
#[derive(Debug, Clone)]
pub struct Launcher {
    program: String,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(DEFAULT_RUNTIME)
    }
}

impl Launcher {
    /// Creates a launcher that invokes `program` as the container runtime.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Argument list for the `run` invocation built from `settings`.
    ///
    /// The trailing `postgres -N 1000` is the command handed to the
    /// container: the server binary with its connection limit raised to
    /// 1000.
    #[must_use]
    pub fn invocation(settings: &PgSettings) -> Vec<String> {
        let [user, password, database] = settings.env_pairs();
        vec![
            "run".into(),
            "-e".into(),
            user,
            "-e".into(),
            password,
            "-e".into(),
            database,
            "-p".into(),
            settings.port_mapping(),
            "-d".into(),
            IMAGE.into(),
            IMAGE.into(),
            "-N".into(),
            "1000".into(),
        ]
    }

    /// Runs the container runtime once and blocks until it returns.
    ///
    /// The runtime returns as soon as the daemon has accepted the request,
    /// not once the database is ready to accept connections.
    ///
    /// # Errors
    /// Returns [`LaunchError::Spawn`] when the runtime binary cannot be
    /// started and [`LaunchError::CommandFailed`] when it exits non-zero.
    pub fn launch(&self, settings: &PgSettings) -> Result<(), LaunchError> {
        let args = Self::invocation(settings);
        debug!(program = %self.program, ?args, "starting container runtime");
        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(LaunchError::CommandFailed {
                program: self.program.clone(),
                status,
            });
        }
        info!(image = IMAGE, port = settings.port, "container start requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| String::from(*t)).collect()
    }

    #[rstest]
    fn default_settings_produce_the_fixed_template() {
        let args = Launcher::invocation(&PgSettings::default());
        assert_eq!(
            args,
            strings(&[
                "run",
                "-e",
                "POSTGRES_USER=axum",
                "-e",
                "POSTGRES_PASSWORD=axum",
                "-e",
                "POSTGRES_DB=axum",
                "-p",
                "5432:5432",
                "-d",
                "postgres",
                "postgres",
                "-N",
                "1000",
            ])
        );
    }

    #[rstest]
    fn custom_port_maps_to_fixed_container_port() {
        let settings = PgSettings {
            port: 6000,
            ..Default::default()
        };
        let args = Launcher::invocation(&settings);
        assert!(args.contains(&String::from("6000:5432")));
        assert!(!args.iter().any(|a| a.ends_with(":6000")));
    }

    #[rstest]
    fn custom_credentials_replace_the_whole_env_triple() {
        let settings = PgSettings {
            user: "bob".into(),
            password: "secret".into(),
            database: "mydb".into(),
            ..Default::default()
        };
        let args = Launcher::invocation(&settings);
        let env_values: Vec<String> = args
            .iter()
            .zip(args.iter().skip(1))
            .filter(|(flag, _)| *flag == "-e")
            .map(|(_, value)| value.clone())
            .collect();
        assert_eq!(
            env_values,
            strings(&[
                "POSTGRES_USER=bob",
                "POSTGRES_PASSWORD=secret",
                "POSTGRES_DB=mydb",
            ])
        );
    }

    #[rstest]
    fn host_never_reaches_the_invocation() {
        let settings = PgSettings {
            host: "db.internal.example".into(),
            ..Default::default()
        };
        let args = Launcher::invocation(&settings);
        assert!(!args.iter().any(|a| a.contains("db.internal.example")));
    }

    #[rstest]
    fn invocation_runs_detached() {
        let args = Launcher::invocation(&PgSettings::default());
        assert!(args.contains(&String::from("-d")));
    }

    #[rstest]
    fn invocation_ends_with_image_and_connection_limit() {
        let args = Launcher::invocation(&PgSettings {
            user: "bob".into(),
            port: 6000,
            ..Default::default()
        });
        assert!(args.ends_with(&strings(&["postgres", "postgres", "-N", "1000"])));
    }
}
