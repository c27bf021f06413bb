//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are plain HTML files under `<site>/templates`, each carrying the
//! theme toggle markup. `/static` serves the stylesheet and `/pkg` the
//! wasm-bindgen output of the `daylight-toggle` crate. Anything unmatched
//! gets the site's 404 page, including missing files under `/static` and
//! `/pkg`. Every response is counted by [`track`].

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::handler::Handler;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{Html, IntoResponse, Response};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::metrics::{Metrics, track};

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Where the site's files live on disk.
#[derive(Clone)]
pub struct SiteState {
    site_dir: Arc<PathBuf>,
}

impl SiteState {
    #[must_use]
    pub fn new(site_dir: impl Into<PathBuf>) -> Self {
        Self { site_dir: Arc::new(site_dir.into()) }
    }

    fn template(&self, name: &str) -> PathBuf {
        self.site_dir.join("templates").join(name)
    }

    fn dir(&self, name: &str) -> PathBuf {
        self.site_dir.join(name)
    }
}

/// Build the application router.
pub fn app(site: SiteState, metrics: Metrics) -> Router {
    let missing_file = not_found.with_state(site.clone());
    Router::new()
        .route_service("/", ServeFile::new(site.template("index.html")))
        .route_service("/login", ServeFile::new(site.template("login.html")))
        .route_service("/signup", ServeFile::new(site.template("signup.html")))
        .route_service("/api/healthz", ServeFile::new(site.template("healthz.html")))
        .nest_service("/static", ServeDir::new(site.dir("static")).not_found_service(missing_file.clone()))
        .nest_service("/pkg", ServeDir::new(site.dir("pkg")).not_found_service(missing_file))
        .fallback(not_found)
        .with_state(site)
        .layer(middleware::from_fn_with_state(metrics, track))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn not_found(State(site): State<SiteState>) -> Response {
    match tokio::fs::read_to_string(site.template("404.html")).await {
        Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "404 page unreadable");
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}
