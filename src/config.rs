// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::Result;
use std::time::Duration;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads a required environment variable.
///
/// # Behavior
/// - Fails fast if the variable is missing
/// - Produces a clear, human-readable error message
/// - Intended for startup-time configuration validation
macro_rules! required_env {
    // ---
    ($key:literal) => {
        std::env::var($key)
            .map_err(|_| anyhow::anyhow!(concat!("Missing required configuration: ", $key)))?
    };
}

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

/// Reads an optional string environment variable with a default.
macro_rules! optional_env {
    // ---
    ($key:literal, $default:expr) => {
        std::env::var($key).unwrap_or_else(|_| $default.to_string())
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails due to a missing
/// required environment variable.
macro_rules! assert_missing_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string()
                .contains(concat!("Missing required configuration: ", $key)),
            "unexpected error: {err}"
        );
    }};
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: server::ServerConfig,
    pub database: database::DatabaseConfig,
    pub session: session::SessionConfig,
    pub admin: admin::AdminConfig,
    pub metrics: MetricsKind,
}

impl AppConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any required configuration is missing or invalid.
    /// This function is intended to be called exactly once at startup.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            server: server::ServerConfig::from_env()?,
            database: database::DatabaseConfig::from_env()?,
            session: session::SessionConfig::from_env()?,
            admin: admin::AdminConfig::from_env()?,
            metrics: MetricsKind::from_env()?,
        })
    }
}

/// Which metrics backend to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsKind {
    Noop,
    Prometheus,
}

impl MetricsKind {
    // ---
    fn from_env() -> Result<Self> {
        // ---
        match optional_env!("VISITOR_METRICS_TYPE", "noop").as_str() {
            "noop" => Ok(Self::Noop),
            "prom" => Ok(Self::Prometheus),
            other => anyhow::bail!("Invalid VISITOR_METRICS_TYPE: {other} (expected noop or prom)"),
        }
    }
}

// ============================================================
// Server configuration
// ============================================================

mod server {
    // ---
    use super::*;

    /// Listen address of the HTTP server.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Interface to bind. Defaults to all interfaces.
        pub host: String,

        /// Listen port, from `PORT`. Defaults to 5000.
        pub port: u16,
    }

    impl ServerConfig {
        // ---
        pub fn from_env() -> Result<Self> {
            // ---
            Ok(Self {
                host: optional_env!("VISITOR_BIND_HOST", "0.0.0.0"),
                port: optional_env_parse!("PORT", u16, 5000),
            })
        }

        /// `host:port` string suitable for `TcpListener::bind`.
        pub fn bind_addr(&self) -> String {
            format!("{}:{}", self.host, self.port)
        }
    }
}
pub use server::ServerConfig;

// ============================================================
// Database configuration
// ============================================================

mod database {
    // ---
    use super::*;

    /// SQLite store configuration.
    #[derive(Debug, Clone)]
    pub struct DatabaseConfig {
        /// SQLite connection string. The file is created if missing.
        pub database_url: String,

        /// Maximum time to wait when acquiring a connection from the pool. Defaults to 30 seconds.
        pub acquire_timeout: Duration,

        /// Maximum number of pooled connections. Defaults to 5.
        /// In-memory databases always use a single connection.
        pub max_connections: u32,
    }

    impl DatabaseConfig {
        /// Builds a [`DatabaseConfig`] from environment variables.
        pub fn from_env() -> Result<Self> {
            // ---
            let database_url = optional_env!("DATABASE_URL", "sqlite://visitors.db");
            let acquire_timeout_secs =
                optional_env_parse!("VISITOR_DB_ACQUIRE_TIMEOUT_SEC", u64, 30);
            let max_connections = optional_env_parse!("VISITOR_DB_MAX_CONNECTIONS", u32, 5);

            Ok(Self {
                database_url,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
                max_connections,
            })
        }

        /// Configuration for a private in-memory database.
        pub fn in_memory() -> Self {
            // ---
            Self {
                database_url: "sqlite::memory:".to_string(),
                acquire_timeout: Duration::from_secs(30),
                max_connections: 1,
            }
        }

        pub fn is_in_memory(&self) -> bool {
            self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
        }
    }
}
pub use database::DatabaseConfig;

// ============================================================
// Session configuration
// ============================================================

mod session {
    // ---
    use super::*;

    /// Where session tokens live.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SessionBackend {
        /// Process-local map; sessions are lost on restart.
        Memory,

        /// Redis keys with a native TTL.
        Redis { url: String },
    }

    /// Session store and cookie settings.
    #[derive(Debug, Clone)]
    pub struct SessionConfig {
        pub backend: SessionBackend,

        /// Lifetime of a session. Defaults to 7 days.
        pub ttl: Duration,

        /// Name of the cookie carrying the session token.
        pub cookie_name: String,

        /// Whether cookies are marked `Secure` (HTTPS only).
        pub cookie_secure: bool,
    }

    impl SessionConfig {
        /// Builds a [`SessionConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error for an unknown backend, or when the Redis backend
        /// is selected without `VISITOR_REDIS_URL`.
        pub fn from_env() -> Result<Self> {
            // ---
            let backend = match optional_env!("VISITOR_SESSION_STORE", "memory").as_str() {
                "memory" => SessionBackend::Memory,
                "redis" => SessionBackend::Redis {
                    url: required_env!("VISITOR_REDIS_URL"),
                },
                other => anyhow::bail!(
                    "Invalid VISITOR_SESSION_STORE: {other} (expected memory or redis)"
                ),
            };
            let ttl_secs = optional_env_parse!("VISITOR_SESSION_TTL_SEC", u64, 604_800);

            Ok(Self {
                backend,
                ttl: Duration::from_secs(ttl_secs),
                cookie_name: optional_env!("VISITOR_SESSION_COOKIE", "visitor_session"),
                cookie_secure: optional_env_parse!("VISITOR_COOKIE_SECURE", bool, false),
            })
        }
    }
}
pub use session::{SessionBackend, SessionConfig};

// ============================================================
// Seeded administrator
// ============================================================

mod admin {
    // ---
    use super::*;

    /// Fallback password of the seeded administrator.
    pub const DEFAULT_ADMIN_PASSWORD: &str = "1234";

    /// Credentials of the administrator created at startup when absent.
    #[derive(Clone)]
    pub struct AdminConfig {
        pub username: String,
        pub password: String,
    }

    impl std::fmt::Debug for AdminConfig {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("AdminConfig")
                .field("username", &self.username)
                .field("password", &"<redacted>")
                .finish()
        }
    }

    impl AdminConfig {
        // ---
        pub fn from_env() -> Result<Self> {
            // ---
            Ok(Self {
                username: optional_env!("VISITOR_ADMIN_USERNAME", "admin"),
                password: optional_env!("VISITOR_ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
            })
        }

        pub fn uses_default_password(&self) -> bool {
            self.password == DEFAULT_ADMIN_PASSWORD
        }
    }
}
pub use admin::{AdminConfig, DEFAULT_ADMIN_PASSWORD};

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use anyhow::Result;
    use serial_test::serial;

    fn clear_session_env() {
        // ---
        std::env::remove_var("VISITOR_SESSION_STORE");
        std::env::remove_var("VISITOR_REDIS_URL");
        std::env::remove_var("VISITOR_SESSION_TTL_SEC");
        std::env::remove_var("VISITOR_SESSION_COOKIE");
        std::env::remove_var("VISITOR_COOKIE_SECURE");
    }

    #[test]
    #[serial]
    fn server_defaults_applied() -> Result<()> {
        // ---
        std::env::remove_var("PORT");
        std::env::remove_var("VISITOR_BIND_HOST");

        let cfg = server::ServerConfig::from_env()?;
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.bind_addr(), "0.0.0.0:5000");

        Ok(())
    }

    #[test]
    #[serial]
    fn port_variable_overrides_default() -> Result<()> {
        // ---
        std::env::set_var("PORT", "8081");

        let cfg = server::ServerConfig::from_env()?;
        assert_eq!(cfg.port, 8081);

        std::env::remove_var("PORT");
        Ok(())
    }

    #[test]
    #[serial]
    fn database_defaults_applied() -> Result<()> {
        // ---
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("VISITOR_DB_ACQUIRE_TIMEOUT_SEC");
        std::env::remove_var("VISITOR_DB_MAX_CONNECTIONS");

        let cfg = database::DatabaseConfig::from_env()?;
        assert_eq!(cfg.database_url, "sqlite://visitors.db");
        assert_eq!(cfg.acquire_timeout.as_secs(), 30);
        assert_eq!(cfg.max_connections, 5);
        assert!(!cfg.is_in_memory());

        Ok(())
    }

    #[test]
    #[serial]
    fn database_overrides_defaults() -> Result<()> {
        // ---
        std::env::set_var("DATABASE_URL", "sqlite::memory:");
        std::env::set_var("VISITOR_DB_ACQUIRE_TIMEOUT_SEC", "5");
        std::env::set_var("VISITOR_DB_MAX_CONNECTIONS", "not-a-number");

        let cfg = database::DatabaseConfig::from_env()?;
        assert_eq!(cfg.acquire_timeout.as_secs(), 5);
        assert_eq!(cfg.max_connections, 5);
        assert!(cfg.is_in_memory());

        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("VISITOR_DB_ACQUIRE_TIMEOUT_SEC");
        std::env::remove_var("VISITOR_DB_MAX_CONNECTIONS");
        Ok(())
    }

    #[test]
    #[serial]
    fn session_defaults_to_memory_store() -> Result<()> {
        // ---
        clear_session_env();

        let cfg = session::SessionConfig::from_env()?;
        assert_eq!(cfg.backend, SessionBackend::Memory);
        assert_eq!(cfg.ttl.as_secs(), 604_800);
        assert_eq!(cfg.cookie_name, "visitor_session");
        assert!(!cfg.cookie_secure);

        Ok(())
    }

    #[test]
    #[serial]
    fn redis_session_store_requires_url() -> Result<()> {
        // ---
        clear_session_env();
        std::env::set_var("VISITOR_SESSION_STORE", "redis");

        assert_missing_config!(session::SessionConfig::from_env(), "VISITOR_REDIS_URL");

        std::env::set_var("VISITOR_REDIS_URL", "redis://127.0.0.1:6379");
        let cfg = session::SessionConfig::from_env()?;
        assert_eq!(
            cfg.backend,
            SessionBackend::Redis {
                url: "redis://127.0.0.1:6379".to_string()
            }
        );

        clear_session_env();
        Ok(())
    }

    #[test]
    #[serial]
    fn unknown_session_store_is_rejected() {
        // ---
        clear_session_env();
        std::env::set_var("VISITOR_SESSION_STORE", "cookie");

        assert!(session::SessionConfig::from_env().is_err());

        clear_session_env();
    }

    #[test]
    #[serial]
    fn admin_config_flags_default_password() -> Result<()> {
        // ---
        std::env::remove_var("VISITOR_ADMIN_USERNAME");
        std::env::remove_var("VISITOR_ADMIN_PASSWORD");

        let cfg = admin::AdminConfig::from_env()?;
        assert_eq!(cfg.username, "admin");
        assert!(cfg.uses_default_password());
        assert!(!format!("{cfg:?}").contains(DEFAULT_ADMIN_PASSWORD));

        std::env::set_var("VISITOR_ADMIN_PASSWORD", "correct horse battery staple");
        let cfg = admin::AdminConfig::from_env()?;
        assert!(!cfg.uses_default_password());

        std::env::remove_var("VISITOR_ADMIN_PASSWORD");
        Ok(())
    }

    #[test]
    #[serial]
    fn app_config_from_env_success() -> Result<()> {
        // ---
        clear_session_env();
        std::env::remove_var("VISITOR_METRICS_TYPE");

        let cfg = AppConfig::from_env()?;
        assert_eq!(cfg.metrics, MetricsKind::Noop);
        assert_eq!(cfg.session.backend, SessionBackend::Memory);

        Ok(())
    }
}
