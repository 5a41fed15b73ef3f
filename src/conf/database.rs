use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;

const DEFAULT_PG_PORT: u16 = 5432;

#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    /// `host` or `host:port`.
    pub host: String,
    pub name: String,
}

impl DatabaseConfig {
    /// Splits an optional `:port` suffix off `host`. A suffix that is not a
    /// port number is left in place.
    pub fn host_and_port(&self) -> (&str, u16) {
        match self.host.rsplit_once(':') {
            Some((host, port)) if !host.is_empty() => match port.parse::<u16>() {
                Ok(port) => (host, port),
                Err(_) => (self.host.as_str(), DEFAULT_PG_PORT),
            },
            _ => (self.host.as_str(), DEFAULT_PG_PORT),
        }
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        let (host, port) = self.host_and_port();
        PgConnectOptions::new()
            .host(host)
            .port(port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

impl fmt::Display for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "postgresql://{}:***@{}/{}", self.user, self.host, self.name)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .field("name", &self.name)
            .finish()
    }
}
