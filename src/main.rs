//! Inventory Dashboard
//!
//! Serves the retail inventory dashboard, and answers a few questions from
//! the terminal using the same backend client and demo fallbacks.
//!
//! # Configuration
//!
//! See `inventory-dashboard init-config` for the file format. Environment
//! variables (`INVENTORY_API_URL`, `INVENTORY_PORT`, ...) override the file,
//! command-line flags override both. `RUST_LOG` replaces the log filter.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventory_dashboard::client::HttpInventoryClient;
use inventory_dashboard::config::{generate_default_config, Config, LoggingConfig};
use inventory_dashboard::dashboard::{DashboardController, DataSource, ProductsView, UiState};
use inventory_dashboard::render::format_currency;
use inventory_dashboard::server::{serve, AppState};

#[derive(Parser)]
#[command(name = "inventory-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Retail inventory dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Inventory backend URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Announce demo mode on load
        #[arg(long)]
        demo: bool,
    },

    /// Print the total product count
    Count,

    /// List products
    Products {
        /// Only products whose name matches
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Generate default config file
    InitConfig {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.backend.base_url = url;
    }

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        demo: false,
    }) {
        Commands::Serve { host, port, demo } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.demo.enabled |= demo;

            init_tracing(&config.logging);
            tracing::info!("Starting inventory dashboard v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Inventory backend: {}", config.backend.base_url);

            let controller = build_controller(&config)?;
            serve(AppState::new(controller, config)).await?;
        }

        Commands::Count => {
            init_tracing(&config.logging);
            let mut controller = build_controller(&config)?;
            controller.load_dashboard_data().await;

            let stats = &controller.state().stats;
            match stats.total_products_source {
                DataSource::Backend => println!("{}", stats.total_products),
                DataSource::Demo => println!("{} (backend unavailable, demo value)", stats.total_products),
            }
        }

        Commands::Products { search } => {
            init_tracing(&config.logging);
            let mut controller = build_controller(&config)?;
            controller.load_products(search.as_deref()).await;
            print_products(controller.state());
        }

        Commands::InitConfig { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)
                        .with_context(|| format!("writing config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

fn build_controller(config: &Config) -> anyhow::Result<DashboardController> {
    let client = HttpInventoryClient::new(config.backend.client_config())
        .context("building inventory backend client")?;
    let state = UiState::new(config.demo.enabled, config.demo.repository_url.clone());

    Ok(DashboardController::new(Arc::new(client), state))
}

/// Logs go to stderr so terminal commands keep stdout for their output
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("inventory_dashboard={},tower_http=debug", logging.level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_products(state: &UiState) {
    match state.products_view {
        ProductsView::Failed => {
            println!("Failed to load products");
            return;
        }
        ProductsView::Loaded(DataSource::Demo) => {
            println!("Backend unavailable, showing sample data.");
            println!();
        }
        _ => {}
    }

    if state.products.is_empty() {
        println!("No products found");
        return;
    }

    println!(
        "{:<14} {:<28} {:<16} {:>12} {:>7}  {}",
        "SKU", "NAME", "CATEGORY", "PRICE", "STOCK", "STATUS"
    );
    for product in &state.products {
        let price = product
            .unit_price
            .map(format_currency)
            .unwrap_or_else(|| "N/A".to_string());

        println!(
            "{:<14} {:<28} {:<16} {:>12} {:>7}  {}",
            product.sku,
            truncate(&product.name, 28),
            product.category_name(),
            price,
            product.stock_level(),
            product.stock_status().label()
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{}...", cut)
    }
}
