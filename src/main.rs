use actix_web::HttpServer;

mod api;
mod auth;
mod config;
mod db;
mod error;
mod model;
mod models;
mod routes;
#[cfg(test)]
mod testing;
mod utils;

use config::Config;
use db::init_db;

use anyhow::Context;
use tracing::info;
use tracing_appender::rolling;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let pool = init_db(&config)
        .await
        .context("Failed to connect to database")?;
    let server_addr = config.server_addr();

    info!(host = %server_addr.0, port = server_addr.1, resources = model::ENTITIES.len(), "Listening");

    HttpServer::new(move || routes::app(pool.clone(), config.clone()))
        .bind(server_addr)?
        .run()
        .await?;

    Ok(())
}
