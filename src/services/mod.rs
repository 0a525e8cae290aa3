//! Business operations behind the HTTP handlers.

mod auth;
mod stats;
mod visitors;

pub use auth::{hash_password, verify_password, AuthService};
pub use stats::StatsService;
pub use visitors::VisitorService;

use crate::domain::{MetricsPtr, RepositoryPtr, SessionStorePtr};

/// All services, wired to the same repository.
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub visitors: VisitorService,
    pub stats: StatsService,
}

impl Services {
    // ---
    pub fn new(repository: RepositoryPtr, sessions: SessionStorePtr, metrics: MetricsPtr) -> Self {
        // ---
        Self {
            auth: AuthService::new(repository.clone(), sessions, metrics.clone()),
            visitors: VisitorService::new(repository.clone(), metrics),
            stats: StatsService::new(repository),
        }
    }
}
