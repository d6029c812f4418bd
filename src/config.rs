//! Application configuration management.
//!
//! All configuration values come from environment variables with sensible
//! local-development defaults, so the binary runs with no setup at all.

use envconfig::Envconfig;
use std::sync::LazyLock;

/// Application configuration loaded from the environment.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name the app is deployed to
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Database connection string
    /// Example: "sqlite:app.db?mode=rwc"
    #[envconfig(default = "sqlite:app.db?mode=rwc")]
    pub db_host: String,

    /// Host address for web server binding
    #[envconfig(default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding
    #[envconfig(default = "8000")]
    pub web_server_port: u16,
}

/// Global application configuration instance.
///
/// Loaded on first access; a missing or malformed variable aborts startup
/// with a descriptive message.
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    AppConfig::init_from_env()
        .expect("Failed to load application configuration. Check environment variables.")
});
