//! HTTP playground for the URL builder.
//!
//! Renders URLs and srcsets for a configured source, as an HTML page and as
//! a small JSON API. It never contacts the CDN itself.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │        GET /   GET /api/url   GET /api/srcset   GET /health     │
//! │                                                                 │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────────┐  │
//! │  │  handlers   │  │ playground  │  │        routes           │  │
//! │  │ (requests)  │  │   (HTML)    │  │  (router config)        │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────────┘  │
//! └────────────────────────────────┬────────────────────────────────┘
//!                                  ▼
//!                      UrlBuilder / srcset composer
//! ```

pub mod handlers;
pub mod playground;
pub mod routes;

pub use handlers::{
    health_handler, playground_handler, srcset_handler, url_handler, widths_handler, ApiError,
    AppState, ErrorResponse, HealthResponse, ImageQueryParams, PlaygroundQueryParams,
    SrcsetResponse, UrlResponse, WidthsQueryParams, WidthsResponse,
};
pub use playground::{render_playground, PlaygroundPage};
pub use routes::{create_router, RouterConfig, DEFAULT_IMAGE_PATH};
