// Test helpers are intentionally partially used
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::sleep;
use tower::ServiceExt;
use visitor_desk::{
    build_router, AdminConfig, AppConfig, DatabaseConfig, MetricsKind, ServerConfig,
    SessionBackend, SessionConfig,
};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "s3cret-pass";
pub const SESSION_COOKIE: &str = "visitor_session";

// ============================================================================
// Test Setup
// ============================================================================

/// Configuration with a private in-memory database and in-memory sessions.
pub fn test_config() -> AppConfig {
    // ---
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig::in_memory(),
        session: SessionConfig {
            backend: SessionBackend::Memory,
            ttl: Duration::from_secs(3600),
            cookie_name: SESSION_COOKIE.to_string(),
            cookie_secure: false,
        },
        admin: AdminConfig {
            username: ADMIN_USERNAME.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        },
        metrics: MetricsKind::Noop,
    }
}

/// The router driven in-process through `tower::ServiceExt::oneshot`.
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    // ---
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: AppConfig) -> Self {
        // ---
        let router = build_router(&config)
            .await
            .expect("Should be able to build router");
        Self { router }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        // ---
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response<Body> {
        // ---
        let mut builder = Request::builder().method("GET").uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, path: &str, form: &str, cookie: Option<&str>) -> Response<Body> {
        // ---
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(form.to_string())).unwrap())
            .await
    }

    /// Log in as the seeded administrator and return the `Cookie` header value.
    pub async fn login(&self) -> String {
        // ---
        let form = format!("username={ADMIN_USERNAME}&password={ADMIN_PASSWORD}");
        let response = self.post_form("/giris", &form, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        cookie_pair(&response, SESSION_COOKIE).expect("login should set the session cookie")
    }

    /// Add a visitor through the HTTP form and return its ID.
    pub async fn add_visitor(&self, cookie: &str, form: &str) -> i64 {
        // ---
        let response = self.post_form("/ziyaretci-ekle", form, Some(cookie)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let listed = body_json(self.get("/ziyaretci-listesi", Some(cookie)).await).await;
        listed["data"][0]["id"].as_i64().expect("visitor id")
    }
}

// ============================================================================
// Response helpers
// ============================================================================

/// `name=value` of a cookie set by the response, if any.
pub fn cookie_pair(response: &Response<Body>, name: &str) -> Option<String> {
    // ---
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{name}=")))
        .map(str::to_string)
}

pub fn location(response: &Response<Body>) -> &str {
    // ---
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    // ---
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body should be JSON")
}

// ============================================================================
// Real listener
// ============================================================================

pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub client: reqwest::Client,
}

impl TestServer {
    // ---
    pub async fn new() -> Self {
        // --
        let app = build_router(&test_config())
            .await
            .expect("Should be able to build router");
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Spawn the server in the background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start
        sleep(Duration::from_millis(100)).await;

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        Self { addr, client }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }
}
