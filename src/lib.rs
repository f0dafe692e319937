//! # Activity Board
//!
//! Extracurricular activity signup service: an in-memory activity catalogue
//! behind a small REST API, serving a Leptos (WASM) board UI.
//!
//! ## Modules
//!
//! - [`catalogue`]: Activity types and the in-memory roster store
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//! - [`client`]: HTTP client for the API (used by the terminal client)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use activity_board::api::{serve, ApiConfig, AppState};
//! use activity_board::catalogue::ActivityStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(ActivityStore::with_default_catalogue());
//!     let config = ApiConfig::new("127.0.0.1", 8000);
//!
//!     serve(AppState::new(store, config.clone()), &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalogue;
pub mod client;
pub mod config;

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use catalogue::{
    Activity, ActivityDetails, ActivityStore, CatalogueStats, RosterError, RosterResult, Snapshot,
};

pub use client::{BoardClient, ClientError};

pub use config::{Config, ConfigError, ConfigLoad, LogFormat, LoggingConfig, ServerConfig};
