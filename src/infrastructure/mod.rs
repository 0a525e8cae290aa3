mod database;
pub mod metrics;
mod sessions;

// Re-export the factory functions for easy access
pub use database::{connect_database, create_sqlite_repository, init_database, init_schema};
pub use metrics::{create_noop_metrics, create_prom_metrics};
pub use sessions::{create_session_store, MemorySessionStore, RedisSessionStore};
