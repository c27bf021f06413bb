use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use tower::ServiceExt;

use super::*;

// =============================================================================
// Helpers
// =============================================================================

fn site_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("site")
}

fn site_app() -> Router {
    app(SiteState::new(site_dir()), Metrics::new().unwrap())
}

async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn pages_carry_the_theme_toggle() {
    for uri in ["/", "/login", "/signup"] {
        let (status, body) = get(site_app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains(r#"id="theme-toggle""#), "{uri} missing toggle");
        assert!(body.contains(r#"id="theme-toggle-icon" class="moon""#), "{uri} missing light icon");
        assert!(body.contains("/pkg/daylight_toggle.js"), "{uri} missing wasm loader");
    }
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, body) = get(site_app(), "/api/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("OK"));
}

#[tokio::test]
async fn stylesheet_has_dark_mode_rules() {
    let response = site_app()
        .oneshot(Request::builder().uri("/static/style.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap().to_owned();
    assert!(content_type.starts_with("text/css"), "{content_type}");
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let css = String::from_utf8(body.to_vec()).unwrap();
    assert!(css.contains("body.dark-mode"));
}

// =============================================================================
// Not found
// =============================================================================

#[tokio::test]
async fn unknown_path_serves_404_page() {
    let (status, body) = get(site_app(), "/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
    assert!(body.contains(r#"id="theme-toggle""#));
}

#[tokio::test]
async fn missing_404_page_falls_back_to_plain_text() {
    let (status, body) = get(app(SiteState::new("/nonexistent-daylight-site"), Metrics::new().unwrap()), "/anything").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Not Found");
}

#[tokio::test]
async fn missing_static_file_serves_404_page() {
    for uri in ["/static/missing.css", "/pkg/missing.wasm"] {
        let (status, body) = get(site_app(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body.contains("Page not found"), "{uri} body: {body:?}");
    }
}

// =============================================================================
// Metrics
// =============================================================================

#[tokio::test]
async fn responses_are_counted_by_status() {
    let metrics = Metrics::new().unwrap();
    let router = app(SiteState::new(site_dir()), metrics.clone());
    get(router.clone(), "/").await;
    get(router.clone(), "/static/style.css").await;
    get(router, "/no/such/page").await;

    let text = metrics.render().unwrap();
    assert!(text.contains(r#"daylight_http_responses_total{status="200"} 2"#), "{text}");
    assert!(text.contains(r#"daylight_http_responses_total{status="404"} 1"#), "{text}");
}
