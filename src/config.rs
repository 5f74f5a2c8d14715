//! Command-line configuration.
//!
//! Every subcommand that builds URLs shares the same builder flags, which can
//! also be set through environment variables with the `IMAGEBOSS_` prefix:
//!
//! - `IMAGEBOSS_SOURCE` - Source name (required)
//! - `IMAGEBOSS_BASE_URL` - Base URL (default: https://img.imageboss.me)
//! - `IMAGEBOSS_SECRET` - Secret for `bossToken` signing
//! - `IMAGEBOSS_HOST` / `IMAGEBOSS_PORT` - Playground bind address
//!
//! # Example
//!
//! ```text
//! imageboss url examples/02.jpg --source mywebsite-images --op width --width 700 -o blur:4
//! imageboss srcset examples/02.jpg --source mywebsite-images --max-width 400
//! imageboss widths --min-width 100 --max-width 380
//! imageboss serve --source mywebsite-images --port 8080
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::builder::{Operation, PathOption, UrlBuilder, DEFAULT_BASE_URL};
use crate::error::ConfigError;
use crate::server::DEFAULT_IMAGE_PATH;
use crate::srcset::{SrcsetConfig, DEFAULT_MIN_WIDTH, DEFAULT_TOLERANCE, MAX_WIDTH};

// =============================================================================
// Default Values
// =============================================================================

/// Default playground host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default playground port.
pub const DEFAULT_PORT: u16 = 8080;

// =============================================================================
// CLI Arguments
// =============================================================================

/// ImageBoss URL builder.
///
/// Builds image URLs, signed URLs and responsive srcsets for an ImageBoss
/// source. Nothing is fetched; every command only prints strings.
#[derive(Parser, Debug, Clone)]
#[command(name = "imageboss")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Consume the CLI and return the selected command.
    pub fn into_command(self) -> Command {
        self.command
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a single image URL
    Url(UrlConfig),

    /// Build a responsive srcset
    Srcset(SrcsetArgs),

    /// Print the target widths for a range
    Widths(WidthsConfig),

    /// Compute a bossToken for an already assembled path
    Sign(SignConfig),

    /// Run the HTTP playground
    Serve(ServeConfig),
}

/// Output format for commands that print a result.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

// =============================================================================
// Shared Arguments
// =============================================================================

/// Builder settings shared by URL-producing commands.
#[derive(Args, Debug, Clone)]
pub struct BuilderArgs {
    /// Source name configured in the ImageBoss dashboard.
    #[arg(long, env = "IMAGEBOSS_SOURCE")]
    pub source: String,

    /// Base URL of the CDN.
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "IMAGEBOSS_BASE_URL")]
    pub base_url: String,

    /// Use http instead of https.
    #[arg(long, default_value_t = false)]
    pub insecure: bool,

    /// Secret for signed URLs. When set, URLs carry a bossToken.
    #[arg(long, env = "IMAGEBOSS_SECRET", hide_env_values = true)]
    pub secret: Option<String>,
}

impl BuilderArgs {
    /// Create the URL builder described by these arguments.
    pub fn build(&self) -> Result<UrlBuilder, ConfigError> {
        let builder = UrlBuilder::new(&self.source)?
            .with_https(!self.insecure)
            .with_base_url(&self.base_url);

        Ok(match self.secret {
            Some(ref secret) => builder.with_secret(secret),
            None => builder,
        })
    }
}

/// Operation and option flags.
#[derive(Args, Debug, Clone)]
pub struct OperationArgs {
    /// Operation: cdn, width, height or cover.
    #[arg(long, default_value = "cdn")]
    pub op: String,

    /// Width for the width and cover operations.
    #[arg(long)]
    pub width: Option<u32>,

    /// Height for the height and cover operations.
    #[arg(long)]
    pub height: Option<u32>,

    /// Crop mode for cover (center, smart, face, north, ...).
    #[arg(long)]
    pub mode: Option<String>,

    /// Path option as key[:v1,v2]. Repeat to add more, order is kept.
    #[arg(short = 'o', long = "option")]
    pub options: Vec<PathOption>,
}

impl OperationArgs {
    /// Resolve the operation flags.
    pub fn operation(&self) -> Result<Operation, ConfigError> {
        Operation::from_parts(&self.op, self.width, self.height, self.mode.as_deref())
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Arguments of `imageboss url`.
#[derive(Args, Debug, Clone)]
pub struct UrlConfig {
    /// Image path relative to the source, e.g. examples/02.jpg.
    pub path: String,

    #[command(flatten)]
    pub builder: BuilderArgs,

    #[command(flatten)]
    pub operation: OperationArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments of `imageboss srcset`.
#[derive(Args, Debug, Clone)]
pub struct SrcsetArgs {
    /// Image path relative to the source.
    pub path: String,

    #[command(flatten)]
    pub builder: BuilderArgs,

    #[command(flatten)]
    pub operation: OperationArgs,

    /// Smallest width of a fluid srcset.
    #[arg(long, default_value_t = i64::from(DEFAULT_MIN_WIDTH), allow_negative_numbers = true)]
    pub min_width: i64,

    /// Largest width of a fluid srcset.
    #[arg(long, default_value_t = i64::from(MAX_WIDTH), allow_negative_numbers = true)]
    pub max_width: i64,

    /// Relative step between fluid widths.
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Do not lower quality for higher pixel ratios.
    #[arg(long, default_value_t = false)]
    pub no_variable_quality: bool,

    /// Explicit comma-separated widths, skipping width generation.
    #[arg(long, value_delimiter = ',')]
    pub widths: Option<Vec<u32>>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl SrcsetArgs {
    /// Srcset settings from the flags.
    pub fn srcset_config(&self) -> SrcsetConfig {
        SrcsetConfig::default()
            .with_min_width(self.min_width)
            .with_max_width(self.max_width)
            .with_tolerance(self.tolerance)
            .with_variable_quality(!self.no_variable_quality)
    }
}

/// Arguments of `imageboss widths`.
#[derive(Args, Debug, Clone)]
pub struct WidthsConfig {
    /// Smallest width.
    #[arg(long, default_value_t = i64::from(DEFAULT_MIN_WIDTH), allow_negative_numbers = true)]
    pub min_width: i64,

    /// Largest width.
    #[arg(long, default_value_t = i64::from(MAX_WIDTH), allow_negative_numbers = true)]
    pub max_width: i64,

    /// Relative step between widths.
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format of `imageboss sign`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignOutputFormat {
    /// Only the token
    #[default]
    Token,
    /// The `?bossToken=` query string
    Query,
    /// JSON with the signed input and the token
    Json,
}

/// Arguments of `imageboss sign`.
#[derive(Args, Debug, Clone)]
pub struct SignConfig {
    /// Path to sign, starting after the host: /<source>/<operation>/.../<image>.
    pub input: String,

    /// Signing secret.
    #[arg(long, env = "IMAGEBOSS_SECRET", hide_env_values = true)]
    pub secret: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = SignOutputFormat::Token)]
    pub format: SignOutputFormat,
}

impl SignConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.secret.is_empty() {
            return Err("Secret is required. Set --secret or IMAGEBOSS_SECRET".to_string());
        }
        if !self.input.starts_with('/') {
            return Err(format!(
                "Input must start with '/' (got {:?}); sign the path after the host",
                self.input
            ));
        }
        Ok(())
    }
}

/// Arguments of `imageboss serve`.
#[derive(Args, Debug, Clone)]
pub struct ServeConfig {
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "IMAGEBOSS_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "IMAGEBOSS_PORT")]
    pub port: u16,

    #[command(flatten)]
    pub builder: BuilderArgs,

    /// Image shown on the playground page.
    #[arg(long, default_value = DEFAULT_IMAGE_PATH)]
    pub image: String,

    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "IMAGEBOSS_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl ServeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.builder.build().map_err(|e| e.to_string())?;

        if self.image.trim().is_empty() {
            return Err("Image path cannot be empty".to_string());
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================
