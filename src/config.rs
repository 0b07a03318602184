use anyhow::{Context, Result, anyhow};
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub enum DatabaseSettings {
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: String,
        password: Option<String>,
        database: String,
    },
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseSettings,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,

    pub jwt_secret: String,
    /// Bearer token lifetime, seconds
    pub token_ttl: usize,

    pub host: String,
    pub port: u16,

    // Rate limiting
    pub rate_login_per_min: u32,
    pub rate_register_per_min: u32,

    /// Resource paths behind the bearer filter; `*` covers all.
    pub protected_resources: Vec<String>,

    pub log_dir: String,
    pub log_level: tracing::Level,
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{} has an invalid value {:?}: {}", key, raw, e)),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database = match lookup("DATABASE_URL") {
            Some(url) => DatabaseSettings::Url(url),
            None => DatabaseSettings::Parts {
                host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parsed(&lookup, "DB_PORT", 3306)?,
                user: lookup("DB_USER").context("DATABASE_URL or DB_USER must be set")?,
                password: lookup("DB_PASSWORD"),
                database: lookup("DB_NAME").context("DATABASE_URL or DB_NAME must be set")?,
            },
        };

        let protected_resources = lookup("PROTECTED_RESOURCES")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().trim_matches('/').to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database,
            db_max_connections: parsed(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            db_acquire_timeout_secs: parsed(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 30)?,
            jwt_secret: lookup("JWT_SECRET").context("JWT_SECRET must be set")?,
            token_ttl: parsed(&lookup, "TOKEN_TTL", 3600)?, // 1 hour
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parsed(&lookup, "PORT", 3000)?,
            rate_login_per_min: parsed(&lookup, "RATE_LOGIN_PER_MIN", 60)?,
            rate_register_per_min: parsed(&lookup, "RATE_REGISTER_PER_MIN", 30)?,
            protected_resources,
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            log_level: parsed(&lookup, "LOG_LEVEL", tracing::Level::DEBUG)?,
        })
    }

    pub fn server_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    pub fn is_protected(&self, resource_path: &str) -> bool {
        self.protected_resources
            .iter()
            .any(|p| p == "*" || p == resource_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "mysql://root@localhost/coffee"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.token_ttl, 3600);
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.log_level, tracing::Level::DEBUG);
        assert!(config.protected_resources.is_empty());
        assert!(!config.is_protected("agents"));
    }

    #[test]
    fn database_from_parts() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_HOST", "db"),
            ("DB_USER", "coffee"),
            ("DB_NAME", "trade"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap();

        match config.database {
            DatabaseSettings::Parts { host, port, user, password, database } => {
                assert_eq!(host, "db");
                assert_eq!(port, 3306);
                assert_eq!(user, "coffee");
                assert_eq!(password, None);
                assert_eq!(database, "trade");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn secret_is_required() {
        let err = Config::from_lookup(lookup_from(&[("DATABASE_URL", "mysql://localhost/c")]))
            .err()
            .unwrap();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn bad_numbers_are_reported() {
        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "mysql://localhost/c"),
            ("JWT_SECRET", "s"),
            ("PORT", "eighty"),
        ]))
        .err()
        .unwrap();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn protected_list() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "mysql://localhost/c"),
            ("JWT_SECRET", "s"),
            ("PROTECTED_RESOURCES", "payments, /users/ ,"),
        ]))
        .unwrap();

        assert_eq!(config.protected_resources, vec!["payments", "users"]);
        assert!(config.is_protected("users"));
        assert!(!config.is_protected("grades"));

        let all = Config {
            protected_resources: vec!["*".to_string()],
            ..config
        };
        assert!(all.is_protected("grades"));
    }
}
