use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod commands;
mod config;
mod setup;

use commands::products::ProductAction;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Storefront CLI
///
/// Manages the product catalog of a storefront API and the local session
/// that authorizes changes to it.
/// - config/: Environment configuration (API, local store)
/// - setup/: Dependency wiring and the route table
/// - commands/: One module per command group
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about = "Storefront catalog client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with the product catalog
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Store the credentials used for catalog changes
    Login {
        #[arg(short, long)]
        token: String,
        #[arg(short, long)]
        user_id: String,
    },
    /// Forget the stored credentials
    Logout,
    /// Show whether a user is logged in
    Status,
    /// Resolve a storefront path through the navigation guard
    Open {
        /// Path such as /admin
        path: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables and parse arguments
    dotenv().ok();
    let cli = Cli::parse();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Run the command, then flush pending state
    let outcome = match cli.command {
        Commands::Products { action } => {
            commands::products::run(&container.product_store, action).await
        }
        Commands::Login { token, user_id } => {
            commands::session::login(&container.session, token, user_id)
        }
        Commands::Logout => commands::session::logout(&container.session),
        Commands::Status => {
            commands::session::status(&container.session);
            Ok(())
        }
        Commands::Open { path } => {
            commands::navigate::open(&container.navigation, &path);
            Ok(())
        }
    };

    container.shutdown().await?;
    outcome
}
