//! Campus Records - Academic records management API
//!
//! This crate provides a records-management backend for an academic
//! institution: accounts and role profiles, academic structure and
//! courses, served over HTTP with Axum and persisted through SeaORM.
//! The core workflow is transactional identity provisioning: an account
//! and its role profile are created together under one transaction with
//! a freshly synthesized human-readable identifier.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and identifier rules
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, asset store)
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Account, AccountStatus, IdScope, Password, Role};
pub use errors::{AppError, AppResult};
