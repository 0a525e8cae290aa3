mod metrics;
mod models;
mod repository;
mod session_store;

// Publicly expose the Metrics abstraction
pub use metrics::{Metrics, MetricsPtr};

// Publicly expose persistence and session abstractions
pub use models::{Administrator, VisitorDetails, VisitorRecord, VisitorStats};
pub use repository::{Repository, RepositoryPtr};
pub use session_store::{SessionInfo, SessionStore, SessionStorePtr};
