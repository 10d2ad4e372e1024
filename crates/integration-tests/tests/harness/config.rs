//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use vj4_config::{Config, ResponseFormat, ServerConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Loopback listener, everything else at its default
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Move the health endpoint
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    /// Force the error body format
    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.config.errors.format = format;
        self
    }

    /// Show internal error messages to clients
    pub fn exposing_internal_details(mut self) -> Self {
        self.config.errors.expose_internal_details = true;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}
