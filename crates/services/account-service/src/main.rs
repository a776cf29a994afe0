//! Account Service - gRPC server for account management.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use account_service_lib::config::AccountServiceConfig;
use account_service_lib::StoreBackend;

#[derive(Parser)]
#[command(name = "account-service")]
#[command(about = "Account management microservice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gRPC server
    Serve {
        /// Overrides ACCOUNT_SERVICE_HOST
        #[arg(long)]
        host: Option<String>,
        /// Overrides ACCOUNT_SERVICE_PORT
        #[arg(long)]
        port: Option<u16>,
        /// Keep accounts in memory instead of PostgreSQL
        #[arg(long)]
        in_memory: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let mut config = AccountServiceConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            in_memory,
        } => {
            if let Some(host) = host {
                config.service.host = host;
            }
            if let Some(port) = port {
                config.service.port = port;
            }
            let backend = if in_memory {
                StoreBackend::InMemory
            } else {
                StoreBackend::Postgres
            };
            account_service_lib::run_server(config, backend).await?;
        }
    }

    Ok(())
}
