// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use handlers::*;

// Public exports (visible outside this module)
pub mod domain;
pub mod services;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod error;
mod flash;
mod handlers;
mod infrastructure;
mod session;

pub use config::*;
pub use error::{AppError, AppResult, INVALID_CREDENTIALS_MESSAGE, LOGIN_PATH};
pub use session::CookieSettings;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    connect_database, // ---
    create_noop_metrics,
    create_prom_metrics,
    create_session_store,
    create_sqlite_repository,
    init_database,
    init_schema,
    MemorySessionStore,
    RedisSessionStore,
};

/// Build the HTTP router from environment configuration.
pub async fn create_router() -> Result<Router> {
    // ---
    let config = AppConfig::from_env()?;
    build_router(&config).await
}

/// Build the HTTP router: open the store, seed the administrator, wire routes.
pub async fn build_router(config: &AppConfig) -> Result<Router> {
    // ---
    let metrics = match config.metrics {
        MetricsKind::Prometheus => create_prom_metrics()?,
        MetricsKind::Noop => create_noop_metrics()?,
    };

    let pool = init_database(&config.database).await?;
    let repository: domain::RepositoryPtr = Arc::new(create_sqlite_repository(pool));
    let sessions = create_session_store(&config.session)?;
    let cookies = CookieSettings {
        name: config.session.cookie_name.clone(),
        secure: config.session.cookie_secure,
    };

    let app_state = AppState::new(repository, sessions, metrics, cookies);

    if config.admin.uses_default_password() {
        tracing::warn!(
            "Administrator '{}' uses the default password; set VISITOR_ADMIN_PASSWORD",
            config.admin.username
        );
    }
    app_state
        .services()
        .auth
        .ensure_admin(&config.admin.username, &config.admin.password)
        .await?;

    Ok(routes(app_state))
}

fn routes(app_state: AppState) -> Router {
    // ---
    Router::new()
        .route("/giris", get(login_page).post(login))
        .route("/cikis", get(logout))
        .route("/", get(root_handler))
        .route("/ziyaretci-listesi", get(list_visitors))
        .route("/ziyaretci-ekle", get(add_visitor_form).post(add_visitor))
        .route(
            "/ziyaretci-duzenle/{id}",
            get(edit_visitor_form).post(edit_visitor),
        )
        .route("/ziyaretci-sil/{id}", post(delete_visitor))
        .route("/istatistikler", get(get_stats))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            track_http_metrics,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
