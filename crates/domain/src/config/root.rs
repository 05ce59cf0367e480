use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::listener::ListenerConfig;
use super::logging::LoggingConfig;
use super::resolver::{ResolverConfig, ResolverMode};
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "emberdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/emberdns/config.toml";

/// Main configuration structure for EmberDNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Bind address and port
    #[serde(default)]
    pub server: ServerConfig,

    /// Receive loop tuning
    #[serde(default)]
    pub listener: ListenerConfig,

    /// Answer policy
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. emberdns.toml in current directory
    /// 3. /etc/emberdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::file_read(path, e))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(mode) = overrides.resolver_mode {
            self.resolver.mode = mode;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        self.server.dns_socket_addr()?;

        if self.listener.recv_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Receive timeout must be greater than 0".to_string(),
            ));
        }

        if self.listener.recv_buffer_size < 12 {
            return Err(ConfigError::Validation(
                "Receive buffer must hold at least a message header".to_string(),
            ));
        }

        if self.resolver.mode == ResolverMode::Local && self.resolver.records.is_empty() {
            return Err(ConfigError::Validation(
                "Local resolver mode requires at least one record".to_string(),
            ));
        }

        for record in &self.resolver.records {
            record.to_resource_record(self.resolver.default_ttl)?;
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::file_write(path, e))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub resolver_mode: Option<ResolverMode>,
    pub log_level: Option<String>,
}
