pub mod config;
pub mod data_formats;
pub mod db_helpers;
pub mod errors;
pub mod extractors;
mod handlers;
pub mod models;

use std::{
    net::{SocketAddr, TcpListener},
    sync::Arc,
};

use anyhow::Context;
pub use anyhow::Result;
use axum::http::StatusCode;
use axum::{routing::*, Extension, Json, Router};
use config::Config;
use handlers::*;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, Sqlite, SqlitePool};
use tower_http::trace::TraceLayer;

pub type JsonResponse<T> = (StatusCode, Json<T>);

pub async fn run_app(app: Router, config: &Config) -> Result<()> {
    let db = init_db(config).await?;
    serve(app, db, config.address()).await
}

/// Serves `app` on `address` against an already prepared pool.
pub async fn serve(app: Router, db: SqlitePool, address: SocketAddr) -> Result<()> {
    let app = app
        .layer(Extension(Arc::new(db)))
        .layer(TraceLayer::new_for_http());
    axum::Server::try_bind(&address)
        .with_context(|| format!("Could not bind to {address}"))?
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

pub async fn init_db(config: &Config) -> Result<SqlitePool> {
    let db_url = &config.database_url;
    if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
        tracing::info!("Creating database {}", db_url);
        Sqlite::create_database(db_url)
            .await
            .with_context(|| format!("Could not create database {db_url}"))?;
    } else {
        tracing::debug!("Database already exists");
    }
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(db_url)
        .await
        .with_context(|| format!("Could not connect to {db_url}"))?;
    run_migrations(&pool).await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    tracing::info!("Running migrations");
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations completed");
    Ok(())
}

pub fn get_random_free_port() -> (u16, SocketAddr) {
    let listener = match TcpListener::bind("127.0.0.1:0") {
        Ok(listener) => listener,
        Err(e) => panic!("Could not bind a free port: {e}"),
    };
    match listener.local_addr() {
        Ok(addr) => (addr.port(), addr),
        Err(_) => panic!("Could not get a free port"),
    }
}

pub fn make_router() -> Router {
    let articles = Router::new()
        .route("/", get(get_articles))
        .route("/:article_id", get(get_article_by_id).patch(patch_article_by_id))
        .route(
            "/:article_id/comments",
            get(get_comments_by_article_id).post(post_comment_by_article_id),
        );

    Router::new()
        .route("/check_health", get(alive))
        .nest("/api/articles", articles)
        .fallback(not_found)
}
