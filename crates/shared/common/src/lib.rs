//! Common utilities shared by the service crates.
//!
//! This crate provides:
//! - Unified error handling with gRPC status conversion
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt, PersistenceError};
