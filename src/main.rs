//! ImageBoss - URL builder for the ImageBoss image CDN.
//!
//! This binary prints URLs, srcsets and tokens, or starts the playground.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imageboss::{
    config::{
        Cli, Command, OutputFormat, ServeConfig, SignConfig, SignOutputFormat, SrcsetArgs,
        UrlConfig, WidthsConfig,
    },
    server::{create_router, RouterConfig},
    sign, srcset_entries, WidthRange, LIB_VERSION, TOKEN_PARAM,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.into_command() {
        Command::Url(config) => run_url(config),
        Command::Srcset(config) => run_srcset(config),
        Command::Widths(config) => run_widths(config),
        Command::Sign(config) => run_sign(config),
        Command::Serve(config) => run_serve(config).await,
    }
}

// =============================================================================
// Url Command
// =============================================================================

fn run_url(config: UrlConfig) -> ExitCode {
    init_cli_logging();

    let builder = match config.builder.build() {
        Ok(builder) => builder,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let operation = match config.operation.operation() {
        Ok(operation) => operation,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let url = builder.create_url(&config.path, &operation, &config.operation.options);

    match config.format {
        OutputFormat::Text => {
            println!("{}", url);
            ExitCode::SUCCESS
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "url": url,
            "source": builder.source(),
            "operation": operation.to_string(),
            "signed": builder.is_signed(),
        })),
    }
}

// =============================================================================
// Srcset Command
// =============================================================================

fn run_srcset(config: SrcsetArgs) -> ExitCode {
    init_cli_logging();

    let builder = match config.builder.build() {
        Ok(builder) => builder,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let operation = match config.operation.operation() {
        Ok(operation) => operation,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let options = &config.operation.options;
    let srcset = match config.widths {
        Some(ref widths) => {
            builder.create_srcset_from_widths(&config.path, &operation, options, widths)
        }
        None => {
            match builder.create_srcset(&config.path, &operation, options, &config.srcset_config())
            {
                Ok(srcset) => srcset,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    match config.format {
        OutputFormat::Text => {
            println!("{}", srcset);
            ExitCode::SUCCESS
        }
        OutputFormat::Json => {
            let entries = srcset_entries(&srcset);
            print_json(&serde_json::json!({
                "srcset": srcset,
                "entries": entries,
            }))
        }
    }
}

// =============================================================================
// Widths Command
// =============================================================================

fn run_widths(config: WidthsConfig) -> ExitCode {
    init_cli_logging();

    let range = match WidthRange::new(config.min_width, config.max_width, config.tolerance) {
        Ok(range) => range,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let widths = range.widths();

    match config.format {
        OutputFormat::Text => {
            let line: Vec<String> = widths.iter().map(u32::to_string).collect();
            println!("{}", line.join(" "));
            ExitCode::SUCCESS
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "min_width": range.min_width(),
            "max_width": range.max_width(),
            "tolerance": range.tolerance(),
            "widths": widths,
        })),
    }
}

// =============================================================================
// Sign Command
// =============================================================================

fn run_sign(config: SignConfig) -> ExitCode {
    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let token = sign(&config.secret, &config.input);

    match config.format {
        SignOutputFormat::Token => {
            println!("{}", token);
            ExitCode::SUCCESS
        }
        SignOutputFormat::Query => {
            println!("?{}={}", TOKEN_PARAM, token);
            ExitCode::SUCCESS
        }
        SignOutputFormat::Json => print_json(&serde_json::json!({
            "input": config.input,
            "token": token,
            "query": format!("{}={}", TOKEN_PARAM, token),
        })),
    }
}

// =============================================================================
// Serve Command
// =============================================================================

async fn run_serve(config: ServeConfig) -> ExitCode {
    // Initialize logging
    init_logging(config.verbose);

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let builder = match config.builder.build() {
        Ok(builder) => builder,
        Err(e) => {
            error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    print_banner();

    info!("Configuration:");
    info!("  Source: {}", builder.source());
    info!("  Base URL: {}", builder.base_url());
    info!("  Sample image: {}", config.image);
    if builder.is_signed() {
        info!("  Signing: enabled");
    } else {
        warn!("  Signing: disabled - URLs carry no bossToken");
    }
    let default_range = WidthRange::default();
    info!(
        "  Srcset defaults: {}-{}px, tolerance {}",
        default_range.min_width(),
        default_range.max_width(),
        default_range.tolerance()
    );

    let router = create_router(builder, build_router_config(&config));
    let addr = config.bind_address();

    info!("");
    info!("────────────────────────────────────────────────────────────────");
    info!("  Playground listening on: http://{}", addr);
    info!("");
    info!("  Try these endpoints:");
    info!("    curl http://{}/health", addr);
    info!(
        "    curl 'http://{}/api/url?path={}&op=width&width=400'",
        addr, config.image
    );
    info!("    curl 'http://{}/api/srcset?path={}'", addr, config.image);
    info!("");
    info!("  Open the playground in your browser:");
    info!("    open http://{}/", addr);
    info!("────────────────────────────────────────────────────────────────");
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Print the startup banner.
fn print_banner() {
    info!("");
    info!("██╗███╗   ███╗ █████╗  ██████╗ ███████╗██████╗  ██████╗ ███████╗███████╗");
    info!("██║████╗ ████║██╔══██╗██╔════╝ ██╔════╝██╔══██╗██╔═══██╗██╔════╝██╔════╝");
    info!("██║██╔████╔██║███████║██║  ███╗█████╗  ██████╔╝██║   ██║███████╗███████╗");
    info!("██║██║╚██╔╝██║██╔══██║██║   ██║██╔══╝  ██╔══██╗██║   ██║╚════██║╚════██║");
    info!("██║██║ ╚═╝ ██║██║  ██║╚██████╔╝███████╗██████╔╝╚██████╔╝███████║███████║");
    info!("╚═╝╚═╝     ╚═╝╚═╝  ╚═╝ ╚═════╝ ╚══════╝╚═════╝  ╚═════╝ ╚══════╝╚══════╝");
    info!("");
    info!("                          {}", LIB_VERSION);
}

/// Build RouterConfig from the application ServeConfig.
fn build_router_config(config: &ServeConfig) -> RouterConfig {
    let mut router_config = RouterConfig::new(config.image.clone());

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    router_config.with_tracing(!config.no_tracing)
}

// =============================================================================
// Helpers
// =============================================================================

/// Initialize the tracing/logging subsystem for the server.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "imageboss=debug,tower_http=debug"
    } else {
        "imageboss=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize logging for one-shot commands. Logs go to stderr so that
/// stdout only carries the result.
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imageboss=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_json(value: &serde_json::Value) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
