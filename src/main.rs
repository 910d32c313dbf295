//! Polymarket arbitrage scout entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusBuilder;
use rust_decimal::Decimal;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use polymarket_scout::api::{create_router, AppState};
use polymarket_scout::arbitrage::{scan_gamma, DEFAULT_MIN_VOLUME};
use polymarket_scout::config::Config;
use polymarket_scout::market::GammaClient;
use polymarket_scout::metrics;
use polymarket_scout::utils::shutdown_signal;

/// Polymarket arbitrage scout.
#[derive(Parser, Debug)]
#[command(name = "polymarket-scout")]
#[command(about = "Scans Polymarket for underpriced YES/NO pairs and alerts Discord")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Run a single arbitrage scan and print the results.
    Scan {
        /// Volume floor in USD.
        #[arg(long)]
        min_volume: Option<Decimal>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load .env before reading RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("polymarket_scout=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Initialize metrics
    metrics::init_metrics();

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::Scan { min_volume }) => cmd_scan(min_volume).await,
        Some(Command::Serve { port }) => cmd_serve(port).await,
        None => cmd_serve(args.port).await,
    }
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("POLYMARKET SCOUT - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Gamma API URL: {}", config.gamma_api_url);
    println!("  HTTP Timeout: {}ms", config.http_timeout_ms);
    println!("  Server Port: {}", config.port);
    if config.metrics_enabled {
        println!("  Metrics: enabled on port {}", config.metrics_port);
    } else {
        println!("  Metrics: disabled");
    }
    if config.alerting_enabled() {
        println!("  Discord Alerts: Enabled");
    } else {
        println!("  Discord Alerts: Disabled (DISCORD_WEBHOOK_URL not set)");
    }
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run a single arbitrage scan and print the results.
async fn cmd_scan(min_volume: Option<Decimal>) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("POLYMARKET SCOUT - ARBITRAGE SCAN");
    println!("======================================================================");

    let config = Config::load()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let min_volume = min_volume.unwrap_or(DEFAULT_MIN_VOLUME);
    println!("Gamma API: {}", config.gamma_api_url);
    println!("Volume floor: ${}", min_volume);
    println!("======================================================================");

    let client = GammaClient::new(&config);
    let opportunities = scan_gamma(&client, min_volume).await?;

    if opportunities.is_empty() {
        println!("\nNo arbitrage opportunities found.");
        return Ok(());
    }

    println!("\nFound {} opportunities:\n", opportunities.len());
    for (i, opp) in opportunities.iter().enumerate() {
        println!("{}. {}", i + 1, opp.event_title);
        println!("   {}", opp.question);
        println!(
            "   Yes ${:.4} + No ${:.4} = ${:.4}",
            opp.yes_price, opp.no_price, opp.combined_price
        );
        println!(
            "   Profit: ${:.4} ({:.2}%)  Volume: ${}",
            opp.potential_profit,
            opp.profit_pct(),
            opp.volume_24h
        );
        println!("   {}", opp.url);
    }

    Ok(())
}

/// Run the HTTP service.
async fn cmd_serve(port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");
    info!("Gamma API: {}", config.gamma_api_url);
    if config.alerting_enabled() {
        info!("Discord alerting enabled");
    } else {
        warn!("DISCORD_WEBHOOK_URL not set; alert endpoints will return errors");
    }

    // Expose Prometheus metrics on a separate port
    if config.metrics_enabled {
        let metrics_addr = SocketAddr::from(([0, 0, 0, 0], config.metrics_port));
        PrometheusBuilder::new()
            .with_http_listener(metrics_addr)
            .install()
            .map_err(|e| anyhow::anyhow!("Failed to install Prometheus exporter: {}", e))?;
        info!("Metrics exporter listening on {}", metrics_addr);
    }

    // Create app state
    let app_state = AppState::new(&config);

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(app_state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
