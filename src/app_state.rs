//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The `AppState` holds the services,
//! the storage backends they share, metrics and cookie settings.
//!
//! The state is cheaply cloneable (using `Arc` internally) so it can be passed
//! to each request handler without copying resources.

use crate::domain::{MetricsPtr, RepositoryPtr, SessionStorePtr};
use crate::services::Services;
use crate::session::CookieSettings;
use std::sync::Arc;

/// Shared application state passed to all Axum handlers.
///
/// This struct serves as the dependency injection container for the
/// application. It is built once in `build_router()`, never mutated, and
/// cloned by Axum for every request.
///
/// # Fields
///
/// - `services`: business operations (auth, visitors, stats)
/// - `repository`: persistent storage, exposed for the full health check
/// - `sessions`: session store, exposed for the full health check
/// - `metrics`: metrics implementation (Prometheus or no-op)
/// - `cookies`: session cookie name and attributes
#[derive(Clone)]
pub(crate) struct AppState {
    services: Arc<Services>,
    repository: RepositoryPtr,
    sessions: SessionStorePtr,
    metrics: MetricsPtr,
    cookies: Arc<CookieSettings>,
}

impl AppState {
    // ---

    pub fn new(
        repository: RepositoryPtr,
        sessions: SessionStorePtr,
        metrics: MetricsPtr,
        cookies: CookieSettings,
    ) -> Self {
        // ---
        let services = Services::new(repository.clone(), sessions.clone(), metrics.clone());

        AppState {
            services: Arc::new(services),
            repository,
            sessions,
            metrics,
            cookies: Arc::new(cookies),
        }
    }

    /// Get a reference to the business services.
    pub(crate) fn services(&self) -> &Services {
        &self.services
    }

    /// Get a reference to the repository implementation.
    pub(crate) fn repository(&self) -> &RepositoryPtr {
        &self.repository
    }

    /// Get a reference to the session store.
    pub(crate) fn sessions(&self) -> &SessionStorePtr {
        &self.sessions
    }

    /// Get a reference to the metrics implementation.
    pub(crate) fn metrics(&self) -> &MetricsPtr {
        &self.metrics
    }

    /// Get the session cookie settings.
    pub(crate) fn cookies(&self) -> &CookieSettings {
        &self.cookies
    }
}
