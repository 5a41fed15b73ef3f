use std::collections::HashMap;

use crate::{
    conf::{DatabaseConfig, PoolConfig, ServerConfig},
    core::FnProxyError::{self, ConfigParsingError},
};
use config::{Config as CConfig, Environment};
use serde::{Deserialize, Serialize};

/// Prefix for optional `server.*` / `pool.*` overrides, e.g. `FNPROXY_SERVER__PORT`.
const ENV_PREFIX: &str = "FNPROXY";

/// Database credentials come from these variables, with no defaults.
const DB_VARS: [(&str, &str); 4] = [
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_HOST", "database.host"),
    ("DB_NAME", "database.name"),
];

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pool: PoolConfig,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_env() -> Result<Config, FnProxyError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Config, FnProxyError> {
        let mut builder = CConfig::builder().add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(Some(
                    vars.iter()
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect(),
                )),
        );
        for (var, key) in DB_VARS {
            builder = builder.set_override_option(key, vars.get(var).cloned())?;
        }

        let config = builder
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        return Ok(config);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn db_vars() -> HashMap<String, String> {
        HashMap::from([
            ("DB_USER".to_string(), "app".to_string()),
            ("DB_PASSWORD".to_string(), "s3cret".to_string()),
            ("DB_HOST".to_string(), "db.internal".to_string()),
            ("DB_NAME".to_string(), "bench".to_string()),
        ])
    }

    #[test]
    fn load_db_vars_with_defaults() {
        let conf = Config::from_vars(&db_vars());
        assert_eq!(
            conf,
            Ok(Config {
                server: ServerConfig::default(),
                pool: PoolConfig::default(),
                database: DatabaseConfig {
                    user: String::from("app"),
                    password: String::from("s3cret"),
                    host: String::from("db.internal"),
                    name: String::from("bench"),
                },
            })
        );
    }

    #[test]
    fn load_prefixed_overrides() {
        let mut vars = db_vars();
        vars.insert("FNPROXY_SERVER__PORT".into(), "9000".into());
        vars.insert("FNPROXY_SERVER__EXPOSE_ERROR_DETAIL".into(), "false".into());
        vars.insert("FNPROXY_POOL__MAX_CONNECTIONS".into(), "4".into());
        vars.insert("FNPROXY_POOL__ACQUIRE_TIMEOUT".into(), "2s".into());

        let conf = Config::from_vars(&vars).unwrap();
        assert_eq!(conf.server.port, 9000);
        assert_eq!(conf.server.host, "0.0.0.0");
        assert!(!conf.server.expose_error_detail);
        assert_eq!(conf.pool.max_connections, 4);
        assert_eq!(conf.pool.acquire_timeout, Duration::from_secs(2));
    }

    #[test]
    fn numeric_password_stays_text() {
        let mut vars = db_vars();
        vars.insert("DB_PASSWORD".into(), "0123".into());
        let conf = Config::from_vars(&vars).unwrap();
        assert_eq!(conf.database.password, "0123");
    }

    #[test]
    fn missing_db_var_fails() {
        for (var, _) in DB_VARS {
            let mut vars = db_vars();
            vars.remove(var);
            let err = Config::from_vars(&vars).unwrap_err();
            assert!(matches!(err, ConfigParsingError(_)), "{var}: {err:?}");
        }
    }

    #[test]
    fn unrelated_vars_are_ignored() {
        let mut vars = db_vars();
        vars.insert("PATH".into(), "/usr/bin".into());
        vars.insert("DB_PORT".into(), "5432".into());
        assert!(Config::from_vars(&vars).is_ok());
    }
}
