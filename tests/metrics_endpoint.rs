use axum::http::{header, StatusCode};
use serial_test::serial;
use visitor_desk::MetricsKind;

mod common;
use common::{test_config, TestApp};

// NOTE: The Prometheus recorder is process-wide, so these tests run serially.

async fn metrics_body(app: &TestApp) -> String {
    // ---
    let response = app.get("/metrics", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("metrics are UTF-8")
}

async fn prometheus_app() -> TestApp {
    // ---
    let mut config = test_config();
    config.metrics = MetricsKind::Prometheus;
    TestApp::with_config(config).await
}

#[tokio::test]
#[serial]
async fn metrics_endpoint_with_noop() {
    // ---
    let app = TestApp::new().await;

    let _ = app.get("/health", None).await;
    let body = metrics_body(&app).await;

    assert!(body.is_empty(), "noop metrics render nothing: {body}");
}

#[tokio::test]
#[serial]
async fn metrics_endpoint_is_public() {
    // ---
    let app = TestApp::new().await;

    let response = app.get("/metrics", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"), "{content_type}");
}

#[tokio::test]
#[serial]
async fn prometheus_counts_logins_and_visitor_operations() {
    // ---
    let app = prometheus_app().await;

    let rejected = app
        .post_form("/giris", "username=admin&password=wrong", None)
        .await;
    assert_eq!(rejected.status(), StatusCode::UNAUTHORIZED);

    let cookie = app.login().await;
    let id = app
        .add_visitor(&cookie, "first_name=Ada&last_name=Lovelace&reason=meeting")
        .await;
    let deleted = app
        .post_form(&format!("/ziyaretci-sil/{id}"), "", Some(&cookie))
        .await;
    assert_eq!(deleted.status(), StatusCode::SEE_OTHER);

    let body = metrics_body(&app).await;

    assert!(body.contains("login_attempts_total"), "{body}");
    assert!(body.contains(r#"outcome="success""#), "{body}");
    assert!(body.contains(r#"outcome="failure""#), "{body}");
    assert!(body.contains("visitor_operations_total"), "{body}");
    assert!(body.contains(r#"operation="create""#), "{body}");
    assert!(body.contains(r#"operation="delete""#), "{body}");
}

#[tokio::test]
#[serial]
async fn prometheus_labels_requests_by_route_template() {
    // ---
    let app = prometheus_app().await;
    let cookie = app.login().await;

    let _ = app.get("/ziyaretci-duzenle/9999", Some(&cookie)).await;
    let body = metrics_body(&app).await;

    assert!(body.contains("http_request_duration_seconds"), "{body}");
    assert!(body.contains(r#"path="/ziyaretci-duzenle/{id}""#), "{body}");
    assert!(!body.contains("/ziyaretci-duzenle/9999"), "{body}");
}

#[tokio::test]
#[serial]
async fn prometheus_backend_can_be_built_twice() {
    // ---
    let first = prometheus_app().await;
    let second = prometheus_app().await;

    assert_eq!(first.get("/health", None).await.status(), StatusCode::OK);
    assert_eq!(second.get("/health", None).await.status(), StatusCode::OK);
}
