/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config 読み込み → DB pool / store 生成 → Router 組み立て
 * - Middleware の適用 (HTTP 共通 / CORS / security headers)
 * - axum::serve() で起動
 */
use std::{panic, process, sync::Arc};

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    api::handlers::health::health,
    config::{Config, HttpLimits},
    middleware,
    repos::{self, PgListStore, PgTodoStore},
    state::AppState,
};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,todo_lists=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // stderr can be hidden depending on how the process is launched.
        tracing::error!(?info, "panic");

        // Development: crash the whole process so the panic is noticed.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting lists API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    let db = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to the database")?;

    repos::migrate(&db)
        .await
        .context("failed to run database migrations")?;

    Ok(AppState::new(
        Arc::new(PgListStore::new(db.clone())),
        Arc::new(PgTodoStore::new(db)),
    ))
}

/// Routes plus the HTTP-level middleware, without the browser-facing layers.
///
/// Any `AppState` works here, which is how the tests inject mock stores.
pub fn router(state: AppState, limits: &HttpLimits) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .nest("/api", api::routes())
        .with_state(state);

    middleware::http::apply(router, limits)
}

fn build_router(state: AppState, config: &Config) -> Router {
    let router = router(state, &config.http);
    let router = middleware::cors::apply(router, config);
    middleware::security_headers::apply(router)
}
