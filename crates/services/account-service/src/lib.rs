//! Account Service Library
//!
//! This crate provides account creation and lookup via gRPC. Collaborators
//! (store, credential hasher, service) are built once here and passed down
//! explicitly.

pub mod config;
pub mod grpc;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tonic::transport::Server;
use tracing::{info, warn};

use domain::Argon2Hasher;

use crate::config::AccountServiceConfig;
use crate::grpc::AccountGrpcService;
use crate::infra::Database;
use crate::repository::{AccountStore, InMemoryAccountStore, SeaOrmAccountStore};
use crate::service::AccountManager;

/// Which account store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL through SeaORM
    Postgres,
    /// Process-local map, lost on shutdown
    InMemory,
}

/// Run the gRPC server with the given configuration until Ctrl-C.
pub async fn run_server(
    config: AccountServiceConfig,
    backend: StoreBackend,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the store
    let (store, db): (Arc<dyn AccountStore>, Option<Database>) = match backend {
        StoreBackend::Postgres => {
            let db = Database::connect(&config.database).await?;
            db.ping().await?;
            let store: Arc<dyn AccountStore> =
                Arc::new(SeaOrmAccountStore::new(db.get_connection()));
            (store, Some(db))
        }
        StoreBackend::InMemory => {
            warn!("Using in-memory account store; accounts are lost on shutdown");
            let store: Arc<dyn AccountStore> = Arc::new(InMemoryAccountStore::new());
            (store, None)
        }
    };

    // Create service
    let account_service = Arc::new(AccountManager::new(store, Arc::new(Argon2Hasher::new())));

    // Create gRPC service
    let grpc_service = AccountGrpcService::new(account_service);

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port).parse()?;
    info!(service = %config.service.service_name, "Account service listening on {}", addr);

    // Run server
    Server::builder()
        .add_service(proto::AccountServiceServer::new(grpc_service))
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    if let Some(db) = db {
        db.disconnect().await?;
        info!("Database connection closed");
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
