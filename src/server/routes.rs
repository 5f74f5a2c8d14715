//! Router configuration for the playground server.
//!
//! # Route Structure
//!
//! ```text
//! /              - Playground page
//! /api/url       - Single URL (JSON)
//! /api/srcset    - Srcset (JSON)
//! /api/widths    - Target widths (JSON)
//! /health        - Health check
//! ```
//!
//! # Example
//!
//! ```ignore
//! use imageboss::server::routes::{create_router, RouterConfig};
//! use imageboss::UrlBuilder;
//!
//! let builder = UrlBuilder::new("mywebsite-images")?;
//! let router = create_router(builder, RouterConfig::new("examples/02.jpg"));
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    health_handler, playground_handler, srcset_handler, url_handler, widths_handler, AppState,
};
use crate::builder::UrlBuilder;

/// Image shown by the playground when none is configured.
pub const DEFAULT_IMAGE_PATH: &str = "examples/02.jpg";

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Image path used by the playground page and as the API default
    pub image_path: String,

    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a router configuration for the given sample image.
    ///
    /// By default CORS allows any origin and tracing is enabled.
    pub fn new(image_path: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
            cors_origins: None,
            enable_tracing: true,
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Allow any CORS origin.
    pub fn with_cors_any_origin(mut self) -> Self {
        self.cors_origins = None;
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_PATH)
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the playground router around a configured builder.
pub fn create_router(builder: UrlBuilder, config: RouterConfig) -> Router {
    let state = AppState::new(builder, config.image_path.as_str());
    let cors = build_cors_layer(&config);

    let router = Router::new()
        .route("/", get(playground_handler))
        .route("/api/url", get(url_handler))
        .route("/api/srcset", get(srcset_handler))
        .route("/api/widths", get(widths_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(cors);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(86400)); // 24 hours

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => cors,
        Some(origins) => {
            let parsed_origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
