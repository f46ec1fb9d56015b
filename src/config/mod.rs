// Configuration module entry point
// Loads layered configuration and holds the shared application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    AssetsConfig, Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig,
    UpstreamConfig,
};

/// Default config file name (extension resolved by the `config` crate)
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Prefix for environment overrides, e.g. `TRACKER_SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "TRACKER";

impl Config {
    /// Load configuration from "config.toml" (optional) plus environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from specified file path (extension optional)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3001)?
            .set_default("server.backlog", 128)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "price-tracker")?
            .set_default("http.enable_cors", true)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .set_default(
                "upstream.compare_endpoint",
                "https://search-new.bitbns.com/buyhatke/comparePrice",
            )?
            .set_default(
                "upstream.product_endpoint",
                "https://buyhatke.com/api/productData",
            )?
            .set_default("upstream.timeout_secs", 30)?
            .set_default("assets.index_file", "static/index.html")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("does/not/exist/tracker").expect("defaults load");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 3001);
        assert!(cfg.server.workers.is_none());
        assert_eq!(cfg.server.backlog, 128);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.http.enable_cors);
        assert_eq!(cfg.upstream.timeout_secs, 30);
        assert!(cfg.upstream.compare_endpoint.ends_with("/comparePrice"));
        assert!(cfg.upstream.product_endpoint.ends_with("/productData"));
        assert_eq!(cfg.assets.index_file, "static/index.html");
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::load_from("does/not/exist/tracker").expect("defaults load");
        assert_eq!(
            cfg.get_socket_addr().expect("valid"),
            "127.0.0.1:3001".parse::<SocketAddr>().expect("valid")
        );

        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
