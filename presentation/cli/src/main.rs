use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod commands;
mod config;
mod render;
mod setup;

use cli::{Cli, Command};
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Storefront shell entry point.
///
/// Initializes logging, loads configuration, wires dependencies, and
/// dispatches one subcommand per page of the storefront.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Dispatch
    let cli = Cli::parse();
    match cli.command {
        Command::Products { search } => commands::products::list(&container, search).await,
        Command::Product { id } => commands::products::show(&container, id).await,
        Command::Cart { action } => commands::cart::run(&container, action).await,
        Command::Checkout { action } => commands::checkout::run(&container, action).await,
        Command::Orders { action } => commands::orders::run(&container, action).await,
        Command::Notifications { action } => {
            commands::notifications::run(&container, action).await
        }
        Command::Wishlist { action } => commands::wishlist::run(&container, action).await,
        Command::Dashboard => commands::orders::summary(&container).await,
        Command::Admin { action } => commands::admin::run(&container, action).await,
        Command::Watch => commands::watch::run(&container, config.sync.poll_period).await,
    }
}
