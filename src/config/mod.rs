// Configuration module entry point
// Layered configuration: defaults, optional config.toml, PORTAL_* env,
// then the PORT variable as the listen-port override

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    AuthConfig, Config, HttpConfig, LoggingConfig, PerformanceConfig, PortalConfig, ServerConfig,
    StaticConfig,
};

impl Config {
    /// Load configuration from the default `config.toml` location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("PORTAL"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("http.server_name", "RegistryPortal/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB, form posts only
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("static.root", "static")?
            .set_default("auth.username", "admin")?
            .set_default("auth.password", "Harbor12345")?
            .set_default("portal.account_name", "admin")?
            .set_default("portal.lang", "en")?
            // PORT is the documented external interface for the listen
            // port, applied last so it wins over file and PORTAL_* env
            .set_override_option("server.port", port_from_env()?)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Read and validate the PORT environment variable
fn port_from_env() -> Result<Option<i64>, config::ConfigError> {
    match std::env::var("PORT") {
        Ok(value) => value
            .parse::<u16>()
            .map(|port| Some(i64::from(port)))
            .map_err(|e| config::ConfigError::Message(format!("Invalid PORT '{value}': {e}"))),
        Err(_) => Ok(None),
    }
}
