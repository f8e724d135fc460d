//! HTTP boundary for Mini Copilot
//!
//! Wraps the snippet engine in a small service:
//! - **Gateway**: validates `(prompt, language)`, applies the simulated
//!   response latency and forwards to the active [`CodeBackend`]
//! - **Server**: axum routes for generation, highlighting and the language list
//!
//! # Example
//!
//! ```rust,ignore
//! use copilot_server::{start_server, AppState, ServerConfig};
//!
//! let config = ServerConfig::from_env().await?;
//! let catalog = config.load_catalog().await?;
//! let state = AppState::from_config(&config, catalog);
//! let (addr, handle) = start_server(&config.bind_addr(), state).await?;
//! ```

pub mod backend;
pub mod config;
pub mod constants;
pub mod gateway;
pub mod server;
pub mod types;

// Re-exports for convenience
pub use backend::{BackendError, BackendInfo, CannedBackend, CodeBackend};
pub use config::{ConfigError, ServerConfig};
pub use gateway::{GatewayError, GenerationGateway, SharedGateway};
pub use server::{router, start_server, ApiError, AppState, ServerError};
