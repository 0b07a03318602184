use crate::config::{Config, DatabaseSettings};
use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use std::str::FromStr;
use std::time::Duration;

pub fn connect_options(settings: &DatabaseSettings) -> Result<MySqlConnectOptions, sqlx::Error> {
    match settings {
        DatabaseSettings::Url(url) => MySqlConnectOptions::from_str(url),
        DatabaseSettings::Parts {
            host,
            port,
            user,
            password,
            database,
        } => {
            let mut options = MySqlConnectOptions::new()
                .host(host)
                .port(*port)
                .username(user)
                .database(database);
            if let Some(password) = password {
                options = options.password(password);
            }
            Ok(options)
        }
    }
}

/// Shared pool; every handler borrows connections from it.
pub async fn init_db(config: &Config) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .connect_with(connect_options(&config.database)?)
        .await
}
