//! Application-wide constants
//!
//! Single source of truth for ports, defaults, environment variable names
//! and route paths.

/// Network port configuration
pub mod ports {
    /// Default port for the HTTP server
    pub const SERVER: u16 = 3000;
}

/// Server host configuration
pub mod hosts {
    /// Default host for local server binding
    pub const LOCAL: &str = "127.0.0.1";
}

/// Default values for server configuration
pub mod defaults {
    /// Simulated model latency before a snippet is returned
    pub const RESPONSE_DELAY_MS: u64 = 1000;
    /// Config file read when no path is given
    pub const CONFIG_FILE: &str = "config.json";
}

/// Environment variables that override the config file
pub mod env {
    pub const CONFIG: &str = "MINI_COPILOT_CONFIG";
    pub const HOST: &str = "MINI_COPILOT_HOST";
    pub const PORT: &str = "MINI_COPILOT_PORT";
    pub const DELAY_MS: &str = "MINI_COPILOT_DELAY_MS";
    pub const CATALOG: &str = "MINI_COPILOT_CATALOG";
}

/// HTTP route paths
pub mod routes {
    pub const GENERATE: &str = "/api/generate";
    pub const HIGHLIGHT: &str = "/api/highlight";
    pub const LANGUAGES: &str = "/api/languages";
    pub const HEALTH: &str = "/health";
}
