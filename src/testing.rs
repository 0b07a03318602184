//! Shared fixtures for handler tests.
//!
//! `lazy_pool` never connects, so it serves every request that fails before
//! SQL runs. Tests that need MySQL use `test_pool`, which returns `None`
//! unless `TEST_DATABASE_URL` is set.

use crate::config::{Config, DatabaseSettings};
pub use crate::routes::app as test_app;
use sqlx::MySqlPool;
use std::net::SocketAddr;

pub fn test_config() -> Config {
    Config {
        database: DatabaseSettings::Url("mysql://root@localhost/coffee_test".to_string()),
        db_max_connections: 5,
        db_acquire_timeout_secs: 5,
        jwt_secret: "test-secret".to_string(),
        token_ttl: 3600,
        host: "127.0.0.1".to_string(),
        port: 0,
        rate_login_per_min: 60,
        rate_register_per_min: 30,
        protected_resources: Vec::new(),
        log_dir: "logs".to_string(),
        log_level: tracing::Level::DEBUG,
    }
}

pub fn lazy_pool() -> MySqlPool {
    MySqlPool::connect_lazy("mysql://root@localhost/coffee_test").unwrap()
}

/// Rate limiters key on the client address, which test requests lack by default.
pub fn peer() -> SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS grades (
        GradeId INT AUTO_INCREMENT PRIMARY KEY,
        GradeName VARCHAR(100) NOT NULL UNIQUE,
        GradeCode VARCHAR(10),
        ClassId INT,
        Description TEXT
    )"#,
    r#"CREATE TABLE IF NOT EXISTS users (
        id INT AUTO_INCREMENT PRIMARY KEY,
        Username VARCHAR(100) NOT NULL UNIQUE,
        Password VARCHAR(255) NOT NULL,
        email VARCHAR(255),
        role_id INT,
        IsActive TINYINT(1) DEFAULT 1,
        FullName VARCHAR(255),
        Phone VARCHAR(50),
        created_at DATETIME
    )"#,
    r#"CREATE TABLE IF NOT EXISTS warrants (
        WarrantId INT AUTO_INCREMENT PRIMARY KEY,
        WarrantNo VARCHAR(100) NOT NULL UNIQUE,
        OutturnNo VARCHAR(100),
        SeasonId INT,
        GradeId INT,
        GrnOutturnId INT,
        WarehouseId INT,
        Bags INT,
        Pockets INT,
        Weight DECIMAL(12,2),
        IssueDate DATE,
        IsReleased TINYINT(1) DEFAULT 0
    )"#,
];

pub async fn test_pool() -> Option<MySqlPool> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = MySqlPool::connect(&url).await.unwrap();
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(&pool).await.unwrap();
    }
    Some(pool)
}
