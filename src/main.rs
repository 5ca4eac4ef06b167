//! REST API for a product/category catalog backed by MySQL.
//!
//! Wiring order: env + logging, config, lazy connection pool, repositories
//! injected as shared data, then the HTTP server with its JSON fallbacks.

mod config;
mod errors;
mod handlers;
mod middleware;
mod models;
mod repository;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::handlers::{
    category_handlers, json_error_handler, not_found, path_error_handler, product_handlers,
};
use crate::middleware::RequestLogger;
use crate::repository::{CategoryRepository, ProductRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let pool = config.pool();

    let product_repo = web::Data::new(ProductRepository::new(pool.clone()));
    let category_repo = web::Data::new(CategoryRepository::new(pool));

    let addr = config.socket_addr();
    info!("Servidor API REST corriendo en http://{addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(product_repo.clone())
            .app_data(category_repo.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .wrap(RequestLogger)
            .wrap(Cors::permissive())
            .configure(product_handlers::configure)
            .configure(category_handlers::configure)
            .default_service(web::route().to(not_found))
    })
    .bind(addr.as_str())
    .with_context(|| format!("failed to bind {addr}"))?
    .run()
    .await
    .context("server terminated with an error")
}
