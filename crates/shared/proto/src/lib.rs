//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated gRPC service definitions for
//! AccountService: account creation and lookup by id, email, or username.

/// Account service definitions.
pub mod account {
    tonic::include_proto!("account");
}

// Re-export commonly used items
pub use account::account_service_client::AccountServiceClient;
pub use account::account_service_server::{AccountService, AccountServiceServer};
