//! # ImageBoss
//!
//! URL builder for the ImageBoss image CDN.
//!
//! Every function in this crate is a pure string transformation: it builds
//! URLs that the CDN understands, but never performs a network request.
//!
//! ## Features
//!
//! - **Operations**: pass-through (`cdn`), `width`, `height` and `cover` with an optional crop mode
//! - **Path options**: ordered `key:value` segments such as `blur:4` or `format:auto`
//! - **Signed URLs**: HMAC-SHA256 `bossToken` query parameter
//! - **Responsive images**: `srcset` strings from a fluid width sequence or device pixel ratios
//! - **Playground**: a small Axum server that renders URLs for a source
//!
//! ## Architecture
//!
//! - [`builder`] - Path sanitizing, operations, options, signing and URL assembly
//! - [`srcset`] - Target widths and `srcset` composition
//! - [`server`] - Axum-based playground and JSON API
//! - [`config`] - CLI and configuration types
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use imageboss::{Operation, SrcsetConfig, UrlBuilder};
//!
//! let builder = UrlBuilder::new("mysecureimages")
//!     .unwrap()
//!     .with_secret("mysecret");
//!
//! let url = builder.create_url("01.jpg", &Operation::width(500).unwrap(), &[]);
//! assert!(url.starts_with("https://img.imageboss.me/mysecureimages/width/500/01.jpg?bossToken="));
//!
//! let srcset = builder
//!     .create_srcset("01.jpg", &Operation::cover(300, 300).unwrap(), &[], &SrcsetConfig::default())
//!     .unwrap();
//! assert_eq!(srcset.lines().count(), 5);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod server;
pub mod srcset;

// Re-export commonly used types
pub use builder::{
    blur, download, download_as, format_auto, quality, sanitize_path, sign, verify, Operation,
    PathOption, UrlBuilder, DEFAULT_BASE_URL, LIB_VERSION, TOKEN_PARAM,
};
pub use config::{
    BuilderArgs, Cli, Command, OperationArgs, OutputFormat, ServeConfig, SignConfig,
    SignOutputFormat, SrcsetArgs, UrlConfig, WidthsConfig,
};
pub use error::{ConfigError, Error, RangeError};
pub use server::{create_router, AppState, RouterConfig};
pub use srcset::{
    dpr_quality, srcset_entries, target_widths, try_target_widths, SrcsetConfig, WidthRange,
    DEFAULT_MIN_WIDTH, DEFAULT_TOLERANCE, DEFAULT_WIDTHS, DPR_RATIOS, ENTRY_SEPARATOR, MAX_WIDTH,
    MIN_TOLERANCE,
};
