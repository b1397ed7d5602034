use actix_web::middleware::{DefaultHeaders, Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;

mod api;
mod calculator;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod routes;
mod store;
mod validation;

use config::{Config, StorageBackend};
use db::{ensure_schema, init_db};
use store::{MemoryStore, MySqlStore, Store};

use crate::docs::ApiDoc;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(backend = %config.storage_backend, "Server starting...");

    match config.storage_backend {
        StorageBackend::Mysql => {
            let pool = init_db(&config.database_url)
                .await
                .context("Failed to connect to database")?;
            ensure_schema(&pool)
                .await
                .context("Failed to create tables")?;
            serve(MySqlStore::new(pool), config).await
        }
        StorageBackend::Memory => serve(MemoryStore::new(), config).await,
    }
}

async fn serve<S: Store>(store: S, config: Config) -> anyhow::Result<()> {
    let store = Data::new(store);
    let server_addr = config.server_addr.clone();

    info!(addr = %server_addr, "Listening");

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*")))
            .wrap(Logger::default())
            .app_data(store.clone())
            .app_data(Data::new(config.clone()))
            .app_data(api::json_config())
            .app_data(api::form_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .configure(|cfg| routes::configure::<S>(cfg, &config))
            .configure(|cfg| routes::configure_frontend(cfg, &config))
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {server_addr}"))?
    .run()
    .await?;

    Ok(())
}
