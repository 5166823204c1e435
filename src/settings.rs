//! Connection settings for the launched PostgreSQL instance.

/// Port PostgreSQL listens on inside the container.
pub const CONTAINER_PORT: u16 = 5432;

/// Immutable record of database credentials and network parameters built
/// from command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgSettings {
    /// Name of the database superuser.
    pub user: String,
    /// Password for the superuser.
    pub password: String,
    /// Name of the initial database.
    pub database: String,
    /// Host the database is expected to be reachable on. Carried for
    /// client tooling; the launch command never uses it.
    pub host: String,
    /// Host port published to the container's fixed port 5432.
    pub port: u16,
}

impl Default for PgSettings {
    fn default() -> Self {
        Self {
            user: "axum".into(),
            password: "axum".into(),
            database: "axum".into(),
            host: "localhost".into(),
            port: CONTAINER_PORT,
        }
    }
}

impl PgSettings {
    /// `KEY=value` pairs injected into the container environment.
    #[must_use]
    pub fn env_pairs(&self) -> [String; 3] {
        [
            format!("POSTGRES_USER={}", self.user),
            format!("POSTGRES_PASSWORD={}", self.password),
            format!("POSTGRES_DB={}", self.database),
        ]
    }

    /// `host:container` publish mapping for the runtime's `-p` flag.
    #[must_use]
    pub fn port_mapping(&self) -> String {
        format!("{}:{CONTAINER_PORT}", self.port)
    }
}
