//! URL builder.
//!
//! A [`UrlBuilder`] targets one ImageBoss source and assembles URLs of the form:
//!
//! ```text
//! https://img.imageboss.me/<source>/<operation>[/<dimensions>][/<option>...]/<path>[?bossToken=<hex>]
//! ```
//!
//! # Example
//!
//! ```
//! use imageboss::{blur, Operation, UrlBuilder};
//!
//! let builder = UrlBuilder::new("mywebsite-images").unwrap();
//! let url = builder.create_url("examples/02.jpg", &Operation::width(700).unwrap(), &[blur(4)]);
//!
//! assert_eq!(
//!     url,
//!     "https://img.imageboss.me/mywebsite-images/width/700/blur:4/examples/02.jpg"
//! );
//! ```

pub mod operation;
pub mod params;
pub mod path;
pub mod signing;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::ConfigError;

pub use operation::Operation;
pub use params::{blur, download, download_as, format_auto, quality, PathOption};
pub use path::sanitize_path;
pub use signing::{sign, verify, TOKEN_PARAM};

/// Default CDN base URL.
pub const DEFAULT_BASE_URL: &str = "https://img.imageboss.me";

/// Library version, for release tracking only. Never added to URLs.
pub const LIB_VERSION: &str = concat!("rust-v", env!("CARGO_PKG_VERSION"));

static SOURCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("valid source pattern"));

// =============================================================================
// Builder
// =============================================================================

/// Builds URLs for a single source.
///
/// The builder holds no interior state; all URL methods take `&self` and can
/// be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    /// Source name as configured in the ImageBoss dashboard
    source: String,

    /// Base URL without trailing slash, scheme included
    base_url: String,

    /// Whether generated URLs use `https`
    use_https: bool,

    /// Secret for `bossToken` signing (None = unsigned URLs)
    secret: Option<String>,
}

impl UrlBuilder {
    /// Create a builder for `source` with the default base URL, HTTPS and no
    /// signing.
    ///
    /// The source is trimmed and must match `[A-Za-z0-9][A-Za-z0-9_-]*`.
    pub fn new(source: impl AsRef<str>) -> Result<Self, ConfigError> {
        let source = validate_source(source.as_ref())?;

        Ok(Self {
            source,
            base_url: DEFAULT_BASE_URL.to_string(),
            use_https: true,
            secret: None,
        })
    }

    /// Use a custom base URL, e.g. a custom CDN domain.
    ///
    /// Trailing slashes are removed. Any scheme given here is replaced by the
    /// one the HTTPS setting decides, matched case-insensitively. A base URL
    /// without a host falls back to [`DEFAULT_BASE_URL`].
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        let host = strip_scheme(base_url.as_ref().trim()).trim_end_matches('/');
        self.base_url = if host.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            host.to_string()
        };
        self.apply_scheme();
        self
    }

    /// Choose between `https` (default) and `http`.
    pub fn with_https(mut self, use_https: bool) -> Self {
        self.set_use_https(use_https);
        self
    }

    /// Sign every URL with `secret`. An empty secret disables signing.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.set_secret(secret);
        self
    }

    /// Switch between `https` and `http` in place.
    pub fn set_use_https(&mut self, use_https: bool) {
        self.use_https = use_https;
        self.apply_scheme();
    }

    /// Replace the signing secret in place. An empty secret disables signing.
    pub fn set_secret(&mut self, secret: impl Into<String>) {
        let secret = secret.into();
        self.secret = (!secret.is_empty()).then_some(secret);
    }

    /// The validated source name.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether URLs use `https`.
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// The signing secret, if any.
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    /// Whether URLs carry a `bossToken`.
    pub fn is_signed(&self) -> bool {
        self.secret.is_some()
    }

    // =========================================================================
    // URL Assembly
    // =========================================================================

    /// Build the URL for an image path, operation and options.
    ///
    /// Options are appended in the given order; options whose key is empty
    /// are skipped.
    pub fn create_url(&self, path: &str, operation: &Operation, options: &[PathOption]) -> String {
        let path = sanitize_path(path);

        let mut segments = vec![
            self.base_url.clone(),
            self.source.clone(),
            operation.path_segment(),
        ];

        let dimensions = operation.dimensions();
        if !dimensions.is_empty() {
            segments.push(dimensions);
        }

        segments.extend(
            options
                .iter()
                .map(PathOption::encode)
                .filter(|segment| !segment.is_empty()),
        );

        segments.push(path);

        let mut url = segments.join("/");

        if let Some(ref secret) = self.secret {
            let message = format!("/{}", segments[1..].join("/"));
            let token = sign(secret, &message);
            debug!(message = %message, "Signed URL");

            url.push('?');
            url.push_str(TOKEN_PARAM);
            url.push('=');
            url.push_str(&token);
        }

        url
    }

    /// Build a pass-through URL carrying only options.
    ///
    /// Use [`UrlBuilder::create_url`] for resize operations.
    pub fn create_url_with_params(&self, path: &str, options: &[PathOption]) -> String {
        self.create_url(path, &Operation::Passthrough, options)
    }

    /// Rewrite the scheme of the base URL to match `use_https`.
    fn apply_scheme(&mut self) {
        let scheme = if self.use_https { "https" } else { "http" };
        self.base_url = format!("{}://{}", scheme, strip_scheme(&self.base_url));
    }
}

/// The part of a base URL after its `scheme://` prefix, if it has one.
fn strip_scheme(base_url: &str) -> &str {
    match base_url.split_once("://") {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => base_url,
    }
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Trim and validate a source name.
fn validate_source(source: &str) -> Result<String, ConfigError> {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptySource);
    }
    if !SOURCE_PATTERN.is_match(trimmed) {
        return Err(ConfigError::InvalidSource(source.to_string()));
    }
    Ok(trimmed.to_string())
}

// =============================================================================
// Tests
// =============================================================================
