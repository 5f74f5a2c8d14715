//! HTTP request handlers for the URL playground.
//!
//! The handlers only render URLs; nothing here fetches an image.
//!
//! # Endpoints
//!
//! - `GET /` - HTML playground page
//! - `GET /api/url` - Build a single URL
//! - `GET /api/srcset` - Build a srcset
//! - `GET /api/widths` - Compute target widths
//! - `GET /health` - Health check endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::{Operation, PathOption, UrlBuilder};
use crate::error::{ConfigError, Error, RangeError};
use crate::srcset::{srcset_entries, try_target_widths, SrcsetConfig};

use super::playground::{render_playground, PlaygroundPage};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Builder used when a request does not override the source
    pub builder: Arc<UrlBuilder>,

    /// Image path shown on the playground page and used when `path` is omitted
    pub image_path: Arc<str>,
}

impl AppState {
    /// Create state around a configured builder.
    pub fn new(builder: UrlBuilder, image_path: impl Into<Arc<str>>) -> Self {
        Self {
            builder: Arc::new(builder),
            image_path: image_path.into(),
        }
    }

    /// The configured builder, or a copy pointed at `source` when given.
    ///
    /// The copy keeps the base URL, scheme and secret of the configured one.
    fn builder_for(&self, source: Option<&str>) -> Result<UrlBuilder, ConfigError> {
        match source {
            Some(source) if !source.trim().is_empty() => {
                let mut builder = UrlBuilder::new(source)?
                    .with_https(self.builder.use_https())
                    .with_base_url(self.builder.base_url());
                if let Some(secret) = self.builder.secret() {
                    builder.set_secret(secret);
                }
                Ok(builder)
            }
            _ => Ok(self.builder.as_ref().clone()),
        }
    }
}

// =============================================================================
// Query Parameters
// =============================================================================

/// Query parameters for the playground page.
#[derive(Debug, Default, Deserialize)]
pub struct PlaygroundQueryParams {
    /// Source override
    pub source: Option<String>,
}

/// Query parameters describing an image URL, shared by the URL and srcset
/// endpoints. The srcset fields are ignored by `/api/url`.
#[derive(Debug, Default, Deserialize)]
pub struct ImageQueryParams {
    /// Source override
    pub source: Option<String>,

    /// Image path (defaults to the configured image)
    pub path: Option<String>,

    /// Operation: cdn, width, height or cover (default: cdn)
    #[serde(default)]
    pub op: String,

    /// Width for width/cover
    pub width: Option<u32>,

    /// Height for height/cover
    pub height: Option<u32>,

    /// Crop mode for cover
    pub mode: Option<String>,

    /// Options separated by `/`, e.g. `blur:4/format:auto`
    pub options: Option<String>,

    /// Smallest fluid width (default: 100)
    pub min_width: Option<i64>,

    /// Largest fluid width (default: 8192)
    pub max_width: Option<i64>,

    /// Tolerance between fluid widths (default: 0.08)
    pub tolerance: Option<f64>,

    /// Per-ratio quality for fixed dimensions (default: true)
    pub variable_quality: Option<bool>,

    /// Explicit comma-separated widths, bypassing generation
    pub widths: Option<String>,
}

impl ImageQueryParams {
    fn operation(&self) -> Result<Operation, ConfigError> {
        Operation::from_parts(&self.op, self.width, self.height, self.mode.as_deref())
    }

    fn path_options(&self) -> Vec<PathOption> {
        self.options
            .as_deref()
            .map(parse_options)
            .unwrap_or_default()
    }

    fn image_path<'a>(&'a self, state: &'a AppState) -> &'a str {
        self.path.as_deref().unwrap_or(&*state.image_path)
    }

    fn srcset_config(&self) -> SrcsetConfig {
        let defaults = SrcsetConfig::default();
        SrcsetConfig {
            min_width: self.min_width.unwrap_or(defaults.min_width),
            max_width: self.max_width.unwrap_or(defaults.max_width),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
            variable_quality: self.variable_quality.unwrap_or(defaults.variable_quality),
        }
    }
}

/// Query parameters for width computation.
#[derive(Debug, Default, Deserialize)]
pub struct WidthsQueryParams {
    pub min_width: Option<i64>,
    pub max_width: Option<i64>,
    pub tolerance: Option<f64>,
}

/// Split a `/`-separated option list into options.
fn parse_options(options: &str) -> Vec<PathOption> {
    options
        .split('/')
        .filter(|segment| !segment.trim().is_empty())
        .filter_map(|segment| segment.parse().ok())
        .collect()
}

/// Parse a comma-separated width list.
fn parse_widths(widths: &str) -> Result<Vec<u32>, ApiError> {
    widths
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(|w| {
            w.parse::<u32>()
                .map_err(|_| ApiError::bad_request(format!("Invalid width: {:?}", w)))
        })
        .collect()
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error response returned for all error conditions.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type identifier (e.g., "invalid_source", "invalid_range")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code (included for convenience)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorResponse {
    /// Create a new error response with status code.
    pub fn with_status(
        error: impl Into<String>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: Some(status.as_u16()),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

/// Response from the URL endpoint.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub url: String,
}

/// Response from the srcset endpoint.
#[derive(Debug, Serialize)]
pub struct SrcsetResponse {
    /// Entries joined with `",\n"`, ready for a `srcset` attribute
    pub srcset: String,

    /// The same entries, one per element
    pub entries: Vec<String>,
}

/// Response from the widths endpoint.
#[derive(Debug, Serialize)]
pub struct WidthsResponse {
    pub widths: Vec<u32>,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Handler error, rendered as a 400 JSON response.
#[derive(Debug)]
pub enum ApiError {
    /// Builder, operation or range error
    Invalid(Error),

    /// Malformed query value
    BadRequest(String),
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::BAD_REQUEST;
        let (error_type, message) = match &self {
            ApiError::Invalid(Error::Config(e)) => ("invalid_config", e.to_string()),
            ApiError::Invalid(Error::Range(e)) => ("invalid_range", e.to_string()),
            ApiError::BadRequest(message) => ("invalid_request", message.clone()),
        };

        debug!(
            error_type = error_type,
            status = status.as_u16(),
            "Client error: {}",
            message
        );

        let error_response = ErrorResponse::with_status(error_type, message, status);
        (status, Json(error_response)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Invalid(err)
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::Invalid(err.into())
    }
}

impl From<RangeError> for ApiError {
    fn from(err: RangeError) -> Self {
        ApiError::Invalid(err.into())
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Render the playground page.
///
/// # Endpoint
///
/// `GET /?source=<source>`
///
/// # Response
///
/// - `200 OK`: HTML page with sample URLs and a fluid 100-400 srcset
/// - `400 Bad Request`: Invalid source override
pub async fn playground_handler(
    State(state): State<AppState>,
    Query(query): Query<PlaygroundQueryParams>,
) -> Result<Html<String>, ApiError> {
    let builder = state.builder_for(query.source.as_deref())?;
    let page = PlaygroundPage::build(&builder, &state.image_path)?;
    Ok(Html(render_playground(&page)))
}

/// Build a single URL.
///
/// # Endpoint
///
/// `GET /api/url?path=&op=&width=&height=&mode=&options=&source=`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// { "url": "https://img.imageboss.me/mywebsite-images/width/700/examples/02.jpg" }
/// ```
pub async fn url_handler(
    State(state): State<AppState>,
    Query(query): Query<ImageQueryParams>,
) -> Result<Json<UrlResponse>, ApiError> {
    let builder = state.builder_for(query.source.as_deref())?;
    let operation = query.operation()?;
    let url = builder.create_url(query.image_path(&state), &operation, &query.path_options());

    Ok(Json(UrlResponse { url }))
}

/// Build a srcset.
///
/// # Endpoint
///
/// `GET /api/srcset?path=&op=&width=&height=&mode=&options=&min_width=&max_width=&tolerance=&variable_quality=&widths=`
///
/// When `widths` is given, generation is skipped and the listed widths are
/// used directly.
pub async fn srcset_handler(
    State(state): State<AppState>,
    Query(query): Query<ImageQueryParams>,
) -> Result<Json<SrcsetResponse>, ApiError> {
    let builder = state.builder_for(query.source.as_deref())?;
    let operation = query.operation()?;
    let options = query.path_options();
    let path = query.image_path(&state);

    let srcset = match query.widths.as_deref() {
        Some(widths) => {
            let widths = parse_widths(widths)?;
            builder.create_srcset_from_widths(path, &operation, &options, &widths)
        }
        None => builder.create_srcset(path, &operation, &options, &query.srcset_config())?,
    };

    let entries = srcset_entries(&srcset)
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(Json(SrcsetResponse { srcset, entries }))
}

/// Compute target widths.
///
/// # Endpoint
///
/// `GET /api/widths?min_width=&max_width=&tolerance=`
pub async fn widths_handler(
    Query(query): Query<WidthsQueryParams>,
) -> Result<Json<WidthsResponse>, ApiError> {
    let defaults = SrcsetConfig::default();
    let widths = try_target_widths(
        query.min_width.unwrap_or(defaults.min_width),
        query.max_width.unwrap_or(defaults.max_width),
        query.tolerance.unwrap_or(defaults.tolerance),
    )?;

    Ok(Json(WidthsResponse { widths }))
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
